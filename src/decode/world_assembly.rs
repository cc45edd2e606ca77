//! Decoding of the World Assembly endpoint.

use log::debug;

use crate::data::{DelegateLogEntry, DelegateVote, Resolution, WorldAssemblyData};
use crate::decode::{
    delimited, happenings, list, number, parse_number, required_number, required_text,
    required_timestamp, text,
};
use crate::error::Result;
use crate::xml::{Element, expect_name};

/// Decode a `WA` element.
pub fn world_assembly(root: &Element) -> Result<WorldAssemblyData> {
    expect_name(root, "WA")?;

    let world_assembly = WorldAssemblyData {
        member_count: number(root, "NUMNATIONS")?,
        delegate_count: number(root, "NUMDELEGATES")?,
        delegates: delimited(root, "DELEGATES", ','),
        members: delimited(root, "MEMBERS", ','),
        happenings: happenings(root, "HAPPENINGS")?,
        member_log: happenings(root, "MEMBERLOG")?,
        resolution: root
            .child("RESOLUTION")
            .map(resolution)
            .transpose()?
            .flatten(),
        last_resolution: text(root, "LASTRESOLUTION"),
    };

    debug!(
        "decoded world assembly, resolution at vote: {}",
        world_assembly.resolution.is_some()
    );
    Ok(world_assembly)
}

/// An empty `RESOLUTION` element means nothing is at vote.
fn resolution(element: &Element) -> Result<Option<Resolution>> {
    if !element.has_children() {
        return Ok(None);
    }

    Ok(Some(Resolution {
        title: required_text(element, "NAME")?,
        category: required_text(element, "CATEGORY")?,
        option: text(element, "OPTION"),
        author: required_text(element, "PROPOSED_BY")?,
        text: required_text(element, "DESC")?,
        created: required_timestamp(element, "CREATED")?,
        votes_for: required_number(element, "TOTAL_VOTES_FOR")?,
        votes_against: required_number(element, "TOTAL_VOTES_AGAINST")?,
        vote_track_for: list(element, "VOTE_TRACK_FOR", "N", parse_number)?,
        vote_track_against: list(element, "VOTE_TRACK_AGAINST", "N", parse_number)?,
        delegate_log: list(element, "DELLOG", "ENTRY", |entry| {
            Ok(DelegateLogEntry {
                timestamp: required_timestamp(entry, "TIMESTAMP")?,
                nation: required_text(entry, "NATION")?,
                action: required_text(entry, "ACTION")?,
                votes: required_number(entry, "VOTES")?,
            })
        })?,
        delegate_votes_for: list(element, "DELVOTES_FOR", "DELEGATE", delegate_vote)?,
        delegate_votes_against: list(element, "DELVOTES_AGAINST", "DELEGATE", delegate_vote)?,
    }))
}

fn delegate_vote(element: &Element) -> Result<DelegateVote> {
    Ok(DelegateVote {
        nation: required_text(element, "NATION")?,
        votes: required_number(element, "VOTES")?,
        timestamp: required_timestamp(element, "TIMESTAMP")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xml::parse_document;

    fn decode(xml: &str) -> Result<WorldAssemblyData> {
        world_assembly(&parse_document(xml.as_bytes()).unwrap())
    }

    const AT_VOTE: &str = r#"<WA council="1">
<NUMNATIONS>25000</NUMNATIONS>
<NUMDELEGATES>700</NUMDELEGATES>
<DELEGATES>alpha,beta</DELEGATES>
<MEMBERLOG><EVENT><TIMESTAMP>1700000000</TIMESTAMP><TEXT>@@gamma@@ was admitted.</TEXT></EVENT></MEMBERLOG>
<RESOLUTION>
<CATEGORY>Education and Creativity</CATEGORY>
<CREATED>1699900000</CREATED>
<DESC>Everyone should read.</DESC>
<NAME>Reading Is Good</NAME>
<OPTION>Educational</OPTION>
<PROPOSED_BY>alpha</PROPOSED_BY>
<TOTAL_VOTES_FOR>1200</TOTAL_VOTES_FOR>
<TOTAL_VOTES_AGAINST>300</TOTAL_VOTES_AGAINST>
<VOTE_TRACK_FOR><N>0</N><N>800</N><N>1200</N></VOTE_TRACK_FOR>
<VOTE_TRACK_AGAINST><N>0</N><N>100</N><N>300</N></VOTE_TRACK_AGAINST>
<DELLOG><ENTRY><TIMESTAMP>1699910000</TIMESTAMP><NATION>beta</NATION><ACTION>FOR</ACTION><VOTES>250</VOTES></ENTRY></DELLOG>
<DELVOTES_FOR><DELEGATE><NATION>beta</NATION><VOTES>250</VOTES><TIMESTAMP>1699910000</TIMESTAMP></DELEGATE></DELVOTES_FOR>
<DELVOTES_AGAINST></DELVOTES_AGAINST>
</RESOLUTION>
</WA>"#;

    #[test]
    fn test_decode_world_assembly() {
        let world_assembly = decode(AT_VOTE).unwrap();

        assert_eq!(world_assembly.member_count, Some(25000));
        assert_eq!(world_assembly.delegate_count, Some(700));
        assert_eq!(
            world_assembly.delegates,
            Some(vec!["alpha".to_string(), "beta".to_string()])
        );
        assert!(world_assembly.members.is_none());
        assert_eq!(world_assembly.member_log.unwrap().len(), 1);
    }

    #[test]
    fn test_resolution() {
        let resolution = decode(AT_VOTE).unwrap().resolution.unwrap();

        assert_eq!(resolution.title, "Reading Is Good");
        assert_eq!(resolution.option.as_deref(), Some("Educational"));
        assert_eq!(resolution.author, "alpha");
        assert_eq!(resolution.votes_for, 1200);
        assert_eq!(resolution.votes_against, 300);
        assert_eq!(resolution.vote_track_for, Some(vec![0, 800, 1200]));
        assert_eq!(resolution.vote_track_against, Some(vec![0, 100, 300]));
        assert_eq!(resolution.delegate_log.unwrap()[0].action, "FOR");
        assert_eq!(resolution.delegate_votes_for.unwrap()[0].votes, 250);
        assert_eq!(resolution.delegate_votes_against, Some(vec![]));
    }

    #[test]
    fn test_resolution_without_dependent_shards() {
        let resolution = decode(
            "<WA><RESOLUTION><CATEGORY>Repeal</CATEGORY><CREATED>1</CREATED><DESC>x</DESC>\
             <NAME>Repeal x</NAME><PROPOSED_BY>beta</PROPOSED_BY>\
             <TOTAL_VOTES_FOR>1</TOTAL_VOTES_FOR><TOTAL_VOTES_AGAINST>2</TOTAL_VOTES_AGAINST>\
             </RESOLUTION></WA>",
        )
        .unwrap()
        .resolution
        .unwrap();

        assert!(resolution.option.is_none());
        assert!(resolution.vote_track_for.is_none());
        assert!(resolution.delegate_log.is_none());
        assert!(resolution.delegate_votes_for.is_none());
    }

    #[test]
    fn test_nothing_at_vote() {
        let world_assembly = decode("<WA><RESOLUTION></RESOLUTION></WA>").unwrap();
        assert!(world_assembly.resolution.is_none());
    }

    #[test]
    fn test_invalid_vote_track() {
        let error = decode(
            "<WA><RESOLUTION><CATEGORY>Repeal</CATEGORY><CREATED>1</CREATED><DESC>x</DESC>\
             <NAME>Repeal x</NAME><PROPOSED_BY>beta</PROPOSED_BY>\
             <TOTAL_VOTES_FOR>1</TOTAL_VOTES_FOR><TOTAL_VOTES_AGAINST>2</TOTAL_VOTES_AGAINST>\
             <VOTE_TRACK_FOR><N>-</N></VOTE_TRACK_FOR></RESOLUTION></WA>",
        )
        .unwrap_err();
        assert!(error.is_response_invalid());
    }
}
