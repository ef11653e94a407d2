use serde::{Deserialize, Serialize};

/// Whether a facet usually stores one value or a list of values per country.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueShape {
    Scalar,
    Sequence,
}

/// A filterable attribute category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Facet {
    Cameras,
    Driving,
    RoadLines,
    FlagColors,
    FlagShapes,
    Alphabet,
    Scenery,
    Continent,
    Bollards,
}

impl Facet {
    /// Canonical order, used for the filter panel and for deep links.
    pub const ALL: [Self; 9] = [
        Self::Cameras,
        Self::Driving,
        Self::RoadLines,
        Self::FlagColors,
        Self::FlagShapes,
        Self::Alphabet,
        Self::Scenery,
        Self::Continent,
        Self::Bollards,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cameras => "cameras",
            Self::Driving => "driving",
            Self::RoadLines => "road_lines",
            Self::FlagColors => "flag_colors",
            Self::FlagShapes => "flag_shapes",
            Self::Alphabet => "alphabet",
            Self::Scenery => "scenery",
            Self::Continent => "continent",
            Self::Bollards => "bollards",
        }
    }

    pub const fn from_index(index: usize) -> Option<Self> {
        if index < Self::ALL.len() {
            Some(Self::ALL[index])
        } else {
            None
        }
    }

    pub fn index(self) -> usize {
        Self::ALL
            .iter()
            .position(|facet| *facet == self)
            .unwrap_or_default()
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "cameras" => Some(Self::Cameras),
            "driving" => Some(Self::Driving),
            "road_lines" => Some(Self::RoadLines),
            "flag_colors" => Some(Self::FlagColors),
            "flag_shapes" => Some(Self::FlagShapes),
            "alphabet" => Some(Self::Alphabet),
            "scenery" => Some(Self::Scenery),
            "continent" => Some(Self::Continent),
            "bollards" => Some(Self::Bollards),
            _ => None,
        }
    }

    pub const fn shape(self) -> ValueShape {
        match self {
            Self::Driving | Self::Continent => ValueShape::Scalar,
            Self::Cameras
            | Self::RoadLines
            | Self::FlagColors
            | Self::FlagShapes
            | Self::Alphabet
            | Self::Scenery
            | Self::Bollards => ValueShape::Sequence,
        }
    }

    /// English heading used when the translation resource has no entry.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Cameras => "Cameras",
            Self::Driving => "Driving side",
            Self::RoadLines => "Road lines",
            Self::FlagColors => "Flag colors",
            Self::FlagShapes => "Flag shapes",
            Self::Alphabet => "Alphabet",
            Self::Scenery => "Scenery",
            Self::Continent => "Continent",
            Self::Bollards => "Bollards",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_every_canonical_key() {
        for facet in Facet::ALL {
            assert_eq!(Facet::parse(facet.as_str()), Some(facet));
        }
        assert_eq!(Facet::parse("country"), None);
        assert_eq!(Facet::parse("Driving"), None);
    }

    #[test]
    fn index_follows_canonical_order() {
        for (index, facet) in Facet::ALL.iter().enumerate() {
            assert_eq!(facet.index(), index);
            assert_eq!(Facet::from_index(index), Some(*facet));
        }
        assert_eq!(Facet::from_index(Facet::ALL.len()), None);
    }

    #[test]
    fn scalar_facets_are_driving_and_continent() {
        let scalars = Facet::ALL
            .iter()
            .filter(|facet| facet.shape() == ValueShape::Scalar)
            .collect::<Vec<_>>();
        assert_eq!(scalars, vec![&Facet::Driving, &Facet::Continent]);
    }
}
