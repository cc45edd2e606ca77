//! Decoding of the region endpoint.

use log::debug;

use crate::data::{Embassy, Message, Poll, PollOption, RegionData, VoteTally};
use crate::decode::{
    delimited, happenings, list, number, required_number, required_number_attribute,
    required_text, required_timestamp, text, url,
};
use crate::error::Result;
use crate::xml::{Element, expect_name};

/// Decode a `REGION` element.
pub fn region(root: &Element) -> Result<RegionData> {
    expect_name(root, "REGION")?;

    let region = RegionData {
        name: text(root, "NAME"),
        factbook: text(root, "FACTBOOK"),
        nation_count: number(root, "NUMNATIONS")?,
        nations: delimited(root, "NATIONS", ':'),
        delegate: text(root, "DELEGATE"),
        delegate_votes: number(root, "DELEGATEVOTES")?,
        general_assembly_vote: root.child("GAVOTE").map(vote_tally).transpose()?,
        security_council_vote: root.child("SCVOTE").map(vote_tally).transpose()?,
        founder: text(root, "FOUNDER"),
        power: text(root, "POWER"),
        flag: url(root, "FLAG")?,
        embassies: list(root, "EMBASSIES", "EMBASSY", |embassy| {
            Ok(Embassy {
                region: embassy.text().to_string(),
                status: embassy.attribute("type").map(str::to_string),
            })
        })?,
        tags: list(root, "TAGS", "TAG", |tag| Ok(tag.text().to_string()))?,
        happenings: happenings(root, "HAPPENINGS")?,
        history: happenings(root, "HISTORY")?,
        messages: list(root, "MESSAGES", "POST", message)?,
        poll: root.child("POLL").map(poll).transpose()?.flatten(),
    };

    debug!("decoded region {:?}", region.name);
    Ok(region)
}

fn vote_tally(element: &Element) -> Result<VoteTally> {
    Ok(VoteTally {
        votes_for: required_number(element, "FOR")?,
        votes_against: required_number(element, "AGAINST")?,
    })
}

fn message(element: &Element) -> Result<Message> {
    Ok(Message {
        timestamp: required_timestamp(element, "TIMESTAMP")?,
        nation: required_text(element, "NATION")?,
        text: required_text(element, "MESSAGE")?,
    })
}

/// An empty `POLL` element means no poll is running.
fn poll(element: &Element) -> Result<Option<Poll>> {
    if !element.has_children() {
        return Ok(None);
    }

    let options = list(element, "OPTIONS", "OPTION", |option| {
        Ok(PollOption {
            id: required_number_attribute(option, "id")?,
            text: required_text(option, "OPTIONTEXT")?,
            votes: required_number(option, "VOTES")?,
        })
    })?;

    Ok(Some(Poll {
        id: required_number_attribute(element, "id")?,
        title: required_text(element, "TITLE")?,
        text: text(element, "TEXT"),
        region: required_text(element, "REGION")?,
        start: required_timestamp(element, "START")?,
        stop: required_timestamp(element, "STOP")?,
        author: required_text(element, "AUTHOR")?,
        options: options.unwrap_or_default(),
    }))
}
