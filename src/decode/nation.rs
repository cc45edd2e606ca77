//! Decoding of the nation endpoint.

use log::debug;

use crate::data::{
    CauseOfDeath, CensusScore, DispatchMetadata, FreedomDescriptions, FreedomScores,
    GovernmentBudget, NationData,
};
use crate::decode::{
    delimited, happenings, list, number, parse_number, parse_percentage, percentage,
    required_attribute, required_number, required_number_attribute, required_percentage,
    required_text, required_timestamp, text, timestamp, url,
};
use crate::error::Result;
use crate::xml::{Element, expect_name};

/// Decode a `NATION` element.
///
/// # Errors
///
/// Returns [`crate::Error::ApiResponseInvalid`] when the element is not a
/// nation or one of its nodes does not convert.
pub fn nation(root: &Element) -> Result<NationData> {
    expect_name(root, "NATION")?;

    let nation = NationData {
        name: text(root, "NAME"),
        full_name: text(root, "FULLNAME"),
        kind: text(root, "TYPE"),
        motto: text(root, "MOTTO"),
        category: text(root, "CATEGORY"),
        world_assembly_status: text(root, "UNSTATUS"),
        endorsements: delimited(root, "ENDORSEMENTS", ','),
        general_assembly_vote: text(root, "GAVOTE"),
        security_council_vote: text(root, "SCVOTE"),
        freedom: root.child("FREEDOM").map(freedom).transpose()?,
        region: text(root, "REGION"),
        population: number(root, "POPULATION")?,
        tax: number(root, "TAX")?,
        animal: text(root, "ANIMAL"),
        animal_trait: text(root, "ANIMALTRAIT"),
        currency: text(root, "CURRENCY"),
        flag: url(root, "FLAG")?,
        major_industry: text(root, "MAJORINDUSTRY"),
        crime: text(root, "CRIME"),
        sensibilities: text(root, "SENSIBILITIES"),
        government_priority: text(root, "GOVTPRIORITY"),
        government_budget: root.child("GOVT").map(government_budget).transpose()?,
        government_description: text(root, "GOVTDESC"),
        industry_description: text(root, "INDUSTRYDESC"),
        notable: text(root, "NOTABLE"),
        admirable: text(root, "ADMIRABLE"),
        founded: text(root, "FOUNDED"),
        first_login: timestamp(root, "FIRSTLOGIN")?,
        last_login: timestamp(root, "LASTLOGIN")?,
        last_activity: text(root, "LASTACTIVITY"),
        influence: text(root, "INFLUENCE"),
        freedom_scores: root.child("FREEDOMSCORES").map(freedom_scores).transpose()?,
        public_sector: percentage(root, "PUBLICSECTOR")?,
        causes_of_death: list(root, "DEATHS", "CAUSE", cause_of_death)?,
        leader: text(root, "LEADER"),
        capital: text(root, "CAPITAL"),
        religion: text(root, "RELIGION"),
        regional_census_rank: number(root, "RCENSUS")?,
        world_census_rank: number(root, "WCENSUS")?,
        census_scores: census_scores(root)?,
        legislation: list(root, "LEGISLATION", "LAW", |law| Ok(law.text().to_string()))?,
        happenings: happenings(root, "HAPPENINGS")?,
        demonym_adjective: text(root, "DEMONYM"),
        demonym_noun: text(root, "DEMONYM2"),
        demonym_noun_plural: text(root, "DEMONYM2PLURAL"),
        factbook_count: number(root, "FACTBOOKS")?,
        factbooks: list(root, "FACTBOOKLIST", "FACTBOOK", dispatch)?,
        dispatch_count: number(root, "DISPATCHES")?,
        dispatches: list(root, "DISPATCHLIST", "DISPATCH", dispatch)?,
    };

    debug!("decoded nation {:?}", nation.name);
    Ok(nation)
}

fn freedom(element: &Element) -> Result<FreedomDescriptions> {
    Ok(FreedomDescriptions {
        civil_rights: required_text(element, "CIVILRIGHTS")?,
        economy: required_text(element, "ECONOMY")?,
        political_freedom: required_text(element, "POLITICALFREEDOM")?,
    })
}

fn freedom_scores(element: &Element) -> Result<FreedomScores> {
    Ok(FreedomScores {
        civil_rights: required_number(element, "CIVILRIGHTS")?,
        economy: required_number(element, "ECONOMY")?,
        political_freedom: required_number(element, "POLITICALFREEDOM")?,
    })
}

fn government_budget(element: &Element) -> Result<GovernmentBudget> {
    Ok(GovernmentBudget {
        environment: required_percentage(element, "ENVIRONMENT")?,
        social_equality: required_percentage(element, "SOCIALEQUALITY")?,
        education: required_percentage(element, "EDUCATION")?,
        law_and_order: required_percentage(element, "LAWANDORDER")?,
        administration: required_percentage(element, "ADMINISTRATION")?,
        welfare: required_percentage(element, "WELFARE")?,
        spirituality: required_percentage(element, "SPIRITUALITY")?,
        defence: required_percentage(element, "DEFENCE")?,
        public_transport: required_percentage(element, "PUBLICTRANSPORT")?,
        healthcare: required_percentage(element, "HEALTHCARE")?,
        commerce: required_percentage(element, "COMMERCE")?,
    })
}

fn cause_of_death(element: &Element) -> Result<CauseOfDeath> {
    Ok(CauseOfDeath {
        cause: required_attribute(element, "type")?,
        percentage: parse_percentage(element)?,
    })
}

/// `CENSUSSCORE` elements sit directly under the nation, one per statistic.
fn census_scores(root: &Element) -> Result<Option<Vec<CensusScore>>> {
    let scores = root
        .children("CENSUSSCORE")
        .map(|element| {
            Ok(CensusScore {
                id: required_number_attribute(element, "id")?,
                score: parse_number(element)?,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok((!scores.is_empty()).then_some(scores))
}

fn dispatch(element: &Element) -> Result<DispatchMetadata> {
    Ok(DispatchMetadata {
        id: required_number_attribute(element, "id")?,
        title: required_text(element, "TITLE")?,
        author: required_text(element, "AUTHOR")?,
        category: required_text(element, "CATEGORY")?,
        subcategory: required_text(element, "SUBCATEGORY")?,
        created: required_timestamp(element, "CREATED")?,
        edited: required_timestamp(element, "EDITED")?,
        views: required_number(element, "VIEWS")?,
        score: required_number(element, "SCORE")?,
    })
}
