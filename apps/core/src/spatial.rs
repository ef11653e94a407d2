use geojson::{Feature, GeoJson, Geometry};
use serde_json::Value;

use crate::error::{Error, Result};

/// Properties checked, in order, for a region's country code.
pub const CODE_PROPERTIES: [&str; 6] = ["ISO_A2", "ISO_A2_EH", "iso_a2", "ISO_A3", "ADM0_A3", "iso_a3"];
const NAME_PROPERTIES: [&str; 3] = ["NAME", "ADMIN", "name"];
// Natural Earth uses this for "no code assigned".
const PLACEHOLDER_CODE: &str = "-99";

pub type Ring = Vec<(f64, f64)>;

/// One drawable country shape in lon/lat.
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    pub code: Option<String>,
    pub name: Option<String>,
    /// Exterior and interior rings of every polygon.
    pub rings: Vec<Ring>,
}

impl Region {
    /// Even-odd test over all rings, so holes are handled.
    pub fn contains(&self, lon: f64, lat: f64) -> bool {
        self.rings
            .iter()
            .filter(|ring| ring_contains(ring, lon, lat))
            .count()
            % 2
            == 1
    }
}

/// A rectangle of character cells the layer is drawn into, in the same
/// column/row coordinates pointer events report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellArea {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl CellArea {
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self { x, y, width, height }
    }

    pub fn contains(&self, column: u16, row: u16) -> bool {
        let (column, row) = (u32::from(column), u32::from(row));
        column >= u32::from(self.x)
            && row >= u32::from(self.y)
            && column < u32::from(self.x) + u32::from(self.width)
            && row < u32::from(self.y) + u32::from(self.height)
    }
}

#[derive(Debug, Clone, Default)]
pub struct SpatialLayer {
    regions: Vec<Region>,
    x_bounds: [f64; 2],
    y_bounds: [f64; 2],
}

impl SpatialLayer {
    pub fn from_geojson(json: &str) -> Result<Self> {
        let geojson = json
            .parse::<GeoJson>()
            .map_err(|error| Error::Geometry(error.to_string()))?;
        let GeoJson::FeatureCollection(collection) = geojson else {
            return Err(Error::Geometry("expected a FeatureCollection".to_string()));
        };

        let regions = collection
            .features
            .iter()
            .filter_map(region_from_feature)
            .collect();
        Ok(Self::from_regions(regions))
    }

    pub fn from_regions(regions: Vec<Region>) -> Self {
        let mut x_bounds = [f64::INFINITY, f64::NEG_INFINITY];
        let mut y_bounds = [f64::INFINITY, f64::NEG_INFINITY];
        for (x, y) in regions.iter().flat_map(|region| region.rings.iter().flatten()) {
            x_bounds = [x_bounds[0].min(*x), x_bounds[1].max(*x)];
            y_bounds = [y_bounds[0].min(*y), y_bounds[1].max(*y)];
        }
        if x_bounds[0] > x_bounds[1] {
            x_bounds = [-180.0, 180.0];
            y_bounds = [-90.0, 90.0];
        }
        Self {
            regions,
            x_bounds,
            y_bounds,
        }
    }

    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    pub const fn x_bounds(&self) -> [f64; 2] {
        self.x_bounds
    }

    pub const fn y_bounds(&self) -> [f64; 2] {
        self.y_bounds
    }

    /// The region under a map click, if any.
    pub fn region_at(&self, lon: f64, lat: f64) -> Option<&Region> {
        self.regions.iter().find(|region| region.contains(lon, lat))
    }

    /// Lon/lat at the center of a cell when the layer's bounds are stretched
    /// over `area`. Cells outside the area give `None`.
    pub fn lon_lat_at(&self, area: CellArea, column: u16, row: u16) -> Option<(f64, f64)> {
        if !area.contains(column, row) {
            return None;
        }

        let [x_min, x_max] = self.x_bounds;
        let [y_min, y_max] = self.y_bounds;
        let fx = (f64::from(column - area.x) + 0.5) / f64::from(area.width);
        let fy = (f64::from(row - area.y) + 0.5) / f64::from(area.height);

        Some((fx.mul_add(x_max - x_min, x_min), fy.mul_add(y_min - y_max, y_max)))
    }
}

fn region_from_feature(feature: &Feature) -> Option<Region> {
    let geometry = feature.geometry.as_ref()?;
    let mut rings = Vec::new();
    collect_rings(geometry, &mut rings);
    if rings.is_empty() {
        return None;
    }

    let properties = feature.properties.as_ref();
    let property = |key: &str| {
        properties
            .and_then(|properties| properties.get(key))
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|value| !value.is_empty() && *value != PLACEHOLDER_CODE)
    };

    let code = CODE_PROPERTIES
        .iter()
        .find_map(|key| property(key))
        .map(str::to_string)
        .or_else(|| match &feature.id {
            Some(geojson::feature::Id::String(id)) if id != PLACEHOLDER_CODE => Some(id.clone()),
            _ => None,
        })
        .map(|code| code.to_uppercase());
    let name = NAME_PROPERTIES
        .iter()
        .find_map(|key| property(key))
        .map(str::to_string);

    Some(Region { code, name, rings })
}

fn collect_rings(geometry: &Geometry, rings: &mut Vec<Ring>) {
    match &geometry.value {
        geojson::Value::Polygon(polygon) => rings.extend(polygon.iter().map(|ring| to_ring(ring))),
        geojson::Value::MultiPolygon(polygons) => {
            for polygon in polygons {
                rings.extend(polygon.iter().map(|ring| to_ring(ring)));
            }
        }
        geojson::Value::GeometryCollection(geometries) => {
            for geometry in geometries {
                collect_rings(geometry, rings);
            }
        }
        _ => {}
    }
}

fn to_ring(positions: &[Vec<f64>]) -> Ring {
    positions
        .iter()
        .filter_map(|position| match position.as_slice() {
            [x, y, ..] => Some((*x, *y)),
            _ => None,
        })
        .collect()
}

fn ring_contains(ring: &[(f64, f64)], x: f64, y: f64) -> bool {
    let mut inside = false;
    let Some(&last) = ring.last() else {
        return false;
    };
    let mut previous = last;
    for &(xi, yi) in ring {
        let (xj, yj) = previous;
        if (yi > y) != (yj > y) && x < (xj - xi) * (y - yi) / (yj - yi) + xi {
            inside = !inside;
        }
        previous = (xi, yi);
    }
    inside
}

#[cfg(test)]
mod tests {
    use super::*;

    const WORLD: &str = r#"{
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "properties": { "ISO_A2": "-99", "ISO_A2_EH": "FR", "NAME": "France" },
                "geometry": { "type": "Polygon", "coordinates": [[[0,0],[10,0],[10,10],[0,10],[0,0]]] }
            },
            {
                "type": "Feature",
                "properties": { "iso_a3": "jpn" },
                "geometry": { "type": "MultiPolygon", "coordinates": [
                    [[[20,0],[30,0],[30,10],[20,10],[20,0]], [[24,4],[26,4],[26,6],[24,6],[24,4]]],
                    [[[40,0],[45,0],[45,5],[40,5],[40,0]]]
                ] }
            },
            {
                "type": "Feature",
                "id": "ATA",
                "properties": {},
                "geometry": { "type": "Polygon", "coordinates": [[[-10,-20],[-5,-20],[-5,-15],[-10,-20]]] }
            },
            {
                "type": "Feature",
                "properties": { "ISO_A2": "XP" },
                "geometry": { "type": "Point", "coordinates": [1, 1] }
            }
        ]
    }"#;

    #[test]
    fn reads_codes_in_fallback_order() -> Result<()> {
        let layer = SpatialLayer::from_geojson(WORLD)?;
        let codes = layer
            .regions()
            .iter()
            .map(|region| region.code.as_deref())
            .collect::<Vec<_>>();
        assert_eq!(codes, [Some("FR"), Some("JPN"), Some("ATA")]);
        assert_eq!(layer.regions()[0].name.as_deref(), Some("France"));
        Ok(())
    }

    #[test]
    fn bounds_cover_every_ring() -> Result<()> {
        let layer = SpatialLayer::from_geojson(WORLD)?;
        assert_eq!(layer.x_bounds(), [-10.0, 45.0]);
        assert_eq!(layer.y_bounds(), [-20.0, 10.0]);
        Ok(())
    }

    #[test]
    fn hit_test_respects_holes_and_islands() -> Result<()> {
        let layer = SpatialLayer::from_geojson(WORLD)?;
        let code_at = |lon, lat| layer.region_at(lon, lat).and_then(|region| region.code.clone());
        assert_eq!(code_at(5.0, 5.0).as_deref(), Some("FR"));
        assert_eq!(code_at(21.0, 1.0).as_deref(), Some("JPN"));
        assert_eq!(code_at(25.0, 5.0), None);
        assert_eq!(code_at(42.0, 2.0).as_deref(), Some("JPN"));
        assert_eq!(code_at(15.0, 5.0), None);
        Ok(())
    }

    fn close(point: Option<(f64, f64)>, expected: (f64, f64)) -> bool {
        point.is_some_and(|(lon, lat)| {
            (lon - expected.0).abs() < 1e-9 && (lat - expected.1).abs() < 1e-9
        })
    }

    fn plate() -> SpatialLayer {
        SpatialLayer::from_regions(vec![Region {
            code: Some("AA".to_string()),
            name: None,
            rings: vec![vec![(-100.0, -50.0), (100.0, -50.0), (100.0, 50.0), (-100.0, 50.0)]],
        }])
    }

    #[test]
    fn cells_map_to_cell_centers() {
        let area = CellArea::new(1, 1, 20, 10);
        let layer = plate();

        assert!(close(layer.lon_lat_at(area, 1, 1), (-95.0, 45.0)));
        assert!(close(layer.lon_lat_at(area, 20, 10), (95.0, -45.0)));
    }

    #[test]
    fn cells_outside_the_area_are_ignored() {
        let area = CellArea::new(1, 1, 20, 10);
        let layer = plate();
        assert_eq!(layer.lon_lat_at(area, 0, 5), None);
        assert_eq!(layer.lon_lat_at(area, 21, 5), None);
        assert_eq!(layer.lon_lat_at(area, 5, 11), None);
        assert!(layer.lon_lat_at(CellArea::new(u16::MAX, 0, 10, 1), u16::MAX, 0).is_some());
    }

    #[test]
    fn rejects_non_collections() {
        let point = r#"{ "type": "Point", "coordinates": [0, 0] }"#;
        assert!(matches!(
            SpatialLayer::from_geojson(point),
            Err(Error::Geometry(_))
        ));
        assert!(SpatialLayer::from_geojson("not json").is_err());
    }

    #[test]
    fn empty_layer_gets_world_bounds() {
        let layer = SpatialLayer::from_regions(Vec::new());
        assert_eq!(layer.x_bounds(), [-180.0, 180.0]);
        assert_eq!(layer.y_bounds(), [-90.0, 90.0]);
    }
}
