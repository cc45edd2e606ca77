//! Decoding of the world endpoint.

use log::debug;

use crate::data::{WorldData, WorldHappening};
use crate::decode::{
    delimited, list, number, required_number_attribute, required_text, required_timestamp, text,
};
use crate::error::Result;
use crate::xml::{Element, expect_name};

/// Decode a `WORLD` element.
pub fn world(root: &Element) -> Result<WorldData> {
    expect_name(root, "WORLD")?;

    let census = root.child("CENSUS");
    let census_id = match number(root, "CENSUSID")? {
        Some(id) => Some(id),
        None => census
            .filter(|census| census.attribute("id").is_some())
            .map(|census| required_number_attribute(census, "id"))
            .transpose()?,
    };

    let world = WorldData {
        nation_count: number(root, "NUMNATIONS")?,
        region_count: number(root, "NUMREGIONS")?,
        census_name: census.map(|census| census.text().to_string()),
        census_id,
        census_size: number(root, "CENSUSSIZE")?,
        census_scale: text(root, "CENSUSSCALE"),
        census_median: number(root, "CENSUSMEDIAN")?,
        featured_region: text(root, "FEATUREDREGION"),
        happenings: list(root, "HAPPENINGS", "EVENT", |event| {
            Ok(WorldHappening {
                id: required_number_attribute(event, "id")?,
                timestamp: required_timestamp(event, "TIMESTAMP")?,
                text: required_text(event, "TEXT")?,
            })
        })?,
        new_nations: delimited(root, "NEWNATIONS", ','),
        regions_by_tag: delimited(root, "REGIONS", ','),
    };

    debug!(
        "decoded world with {} happenings",
        world.happenings.as_ref().map_or(0, Vec::len)
    );
    Ok(world)
}
