//! Data dump decoding.
//!
//! A dump is one document with a container root (`NATIONS` or `REGIONS`)
//! holding one element per nation or region, in the exact shape the live
//! endpoints return. Each child goes through the same decoder as a live
//! response.

use std::io::BufRead;

use log::info;

use crate::data::{NationData, RegionData};
use crate::decode::{nation, region};
use crate::error::Result;
use crate::xml::for_each_child;

/// Decode a decompressed nations dump.
///
/// # Arguments
///
/// * `input` - The uncompressed XML, read as a stream.
pub fn nations_dump<R: BufRead>(input: R) -> Result<Vec<NationData>> {
    let mut nations = Vec::new();
    for_each_child(input, "NATIONS", "NATION", |element| {
        nations.push(nation(&element)?);
        Ok(())
    })?;

    info!("decoded {} nations from dump", nations.len());
    Ok(nations)
}

/// Decode a decompressed regions dump.
pub fn regions_dump<R: BufRead>(input: R) -> Result<Vec<RegionData>> {
    let mut regions = Vec::new();
    for_each_child(input, "REGIONS", "REGION", |element| {
        regions.push(region(&element)?);
        Ok(())
    })?;

    info!("decoded {} regions from dump", regions.len());
    Ok(regions)
}

#[cfg(test)]
mod tests {
    use std::io::{BufReader, Write};

    use flate2::Compression;
    use flate2::read::GzDecoder;
    use flate2::write::GzEncoder;

    use super::*;
    use crate::xml::parse_document;

    const FIRST: &str = "<NATION><NAME>First</NAME><ENDORSEMENTS></ENDORSEMENTS><POPULATION>10</POPULATION></NATION>";
    const SECOND: &str = "<NATION><NAME>Second</NAME><GOVT><ADMINISTRATION>1%</ADMINISTRATION><DEFENCE>1%</DEFENCE><EDUCATION>1%</EDUCATION><ENVIRONMENT>24%</ENVIRONMENT><HEALTHCARE>1%</HEALTHCARE><COMMERCE>1%</COMMERCE><LAWANDORDER>1%</LAWANDORDER><PUBLICTRANSPORT>1%</PUBLICTRANSPORT><SOCIALEQUALITY>1%</SOCIALEQUALITY><SPIRITUALITY>1%</SPIRITUALITY><WELFARE>66%</WELFARE></GOVT></NATION>";

    #[test]
    fn test_nations_dump_matches_single_decode() {
        let dump = format!("<?xml version=\"1.0\"?>\n<NATIONS>\n{FIRST}\n{SECOND}\n</NATIONS>");
        let nations = nations_dump(dump.as_bytes()).unwrap();

        let expected: Vec<NationData> = [FIRST, SECOND]
            .iter()
            .map(|fragment| nation(&parse_document(fragment.as_bytes()).unwrap()).unwrap())
            .collect();

        assert_eq!(nations.len(), 2);
        assert_eq!(nations, expected);
        assert_eq!(nations[0].name.as_deref(), Some("First"));
        assert_eq!(nations[1].name.as_deref(), Some("Second"));
    }

    #[test]
    fn test_gzip_nations_dump() {
        let dump = format!("<NATIONS>{FIRST}{SECOND}</NATIONS>");
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(dump.as_bytes()).unwrap();
        let compressed = encoder.finish().unwrap();

        let nations = nations_dump(BufReader::new(GzDecoder::new(compressed.as_slice()))).unwrap();
        assert_eq!(nations.len(), 2);
        assert_eq!(nations[0].endorsements, Some(vec![]));
    }

    #[test]
    fn test_regions_dump() {
        let dump = "<REGIONS><REGION><NAME>a</NAME></REGION><REGION><NAME>b</NAME><POLL/></REGION></REGIONS>";
        let regions = regions_dump(dump.as_bytes()).unwrap();

        assert_eq!(regions.len(), 2);
        assert_eq!(regions[1].name.as_deref(), Some("b"));
        assert!(regions[1].poll.is_none());
    }

    #[test]
    fn test_dump_with_wrong_root() {
        let error = nations_dump("<REGIONS></REGIONS>".as_bytes()).unwrap_err();
        assert!(error.is_response_invalid());
    }

    #[test]
    fn test_dump_with_invalid_nation() {
        let dump = "<NATIONS><NATION><POPULATION>x</POPULATION></NATION></NATIONS>";
        assert!(nations_dump(dump.as_bytes()).unwrap_err().is_response_invalid());
    }
}
