//! IOF XML 3.0 `ResultList` parsing into flat per-competitor records.

use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use serde::Deserialize;
use tracing::debug;

use crate::error::ResultsError;
use crate::normalize::normalize_category;
use crate::scoring::PointsTable;

/// Identifier type attribute carrying the national federation number.
const FEDERATION_ID_TYPE: &str = "SVK";

/// One race, parsed from a single result document. Immutable after
/// parsing; the season pipeline orders events by `date`.
#[derive(Debug, Clone)]
pub struct Event {
    pub name: String,
    pub date: NaiveDate,
    pub records: Vec<ResultRecord>,
}

/// The composite identity of a person across events.
///
/// There is no stronger identifier in the input: two same-named
/// competitors who both lack a federation id collapse into a single
/// season row. This is a documented ambiguity of the source data, not
/// something the pipeline can detect.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CompetitorKey {
    pub given: String,
    pub family: String,
    pub external_id: String,
}

/// One (category, competitor) result within an event.
#[derive(Debug, Clone)]
pub struct ResultRecord {
    /// Canonical category key, already normalized.
    pub category: String,
    pub competitor: CompetitorKey,
    /// Finishing position; `None` when missing or non-numeric.
    pub position: Option<u32>,
    /// Points derived from `position`; zero without a valid position.
    pub points: u32,
    /// Raw `<Status>` text, mapped to an outcome during aggregation.
    pub status_raw: String,
}

// -- IOF XML 3.0 document shape (only the elements we read) --

#[derive(Debug, Deserialize)]
struct ResultListXml {
    #[serde(rename = "Event")]
    event: Option<EventXml>,
    #[serde(rename = "ClassResult", default)]
    class_results: Vec<ClassResultXml>,
}

#[derive(Debug, Default, Deserialize)]
struct EventXml {
    #[serde(rename = "Name")]
    name: Option<String>,
    #[serde(rename = "StartTime")]
    start_time: Option<StartTimeXml>,
}

#[derive(Debug, Deserialize)]
struct StartTimeXml {
    #[serde(rename = "Date")]
    date: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ClassResultXml {
    #[serde(rename = "Class")]
    class: Option<ClassXml>,
    #[serde(rename = "PersonResult", default)]
    person_results: Vec<PersonResultXml>,
}

#[derive(Debug, Deserialize)]
struct ClassXml {
    #[serde(rename = "Name")]
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PersonResultXml {
    #[serde(rename = "Person")]
    person: Option<PersonXml>,
    // Multi-race documents repeat <Result>; only the first is scored.
    #[serde(rename = "Result", default)]
    results: Vec<RaceResultXml>,
}

#[derive(Debug, Default, Deserialize)]
struct PersonXml {
    #[serde(rename = "Name")]
    name: Option<NameXml>,
    #[serde(rename = "Id", default)]
    ids: Vec<IdXml>,
}

#[derive(Debug, Deserialize)]
struct NameXml {
    #[serde(rename = "Family")]
    family: Option<String>,
    #[serde(rename = "Given")]
    given: Option<String>,
}

#[derive(Debug, Deserialize)]
struct IdXml {
    #[serde(rename = "@type")]
    id_type: Option<String>,
    #[serde(rename = "$text")]
    value: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RaceResultXml {
    #[serde(rename = "Position")]
    position: Option<String>,
    #[serde(rename = "Status")]
    status: Option<String>,
}

/// Parse one result document from disk.
///
/// Fatal per file: unreadable input, malformed XML, and a missing or
/// unparseable event start date. Record-level problems (non-numeric
/// positions, absent ids, empty class names) resolve to defaults.
pub fn parse_event(path: &Path, points: &PointsTable) -> Result<Event, ResultsError> {
    let xml = fs::read_to_string(path).map_err(|source| ResultsError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_event_str(&xml, path, points)
}

/// Parse one result document from an in-memory string. `source` is
/// only used for error messages.
pub fn parse_event_str(
    xml: &str,
    source: &Path,
    points: &PointsTable,
) -> Result<Event, ResultsError> {
    let doc: ResultListXml = quick_xml::de::from_str(xml).map_err(|e| ResultsError::Xml {
        path: source.to_path_buf(),
        source: e,
    })?;

    let info = doc.event.unwrap_or_default();
    let name = info.name.unwrap_or_default().trim().to_string();
    let date_text = info
        .start_time
        .and_then(|start| start.date)
        .ok_or_else(|| ResultsError::MissingDate {
            path: source.to_path_buf(),
        })?;
    let date = NaiveDate::parse_from_str(date_text.trim(), "%Y-%m-%d").map_err(|e| {
        ResultsError::BadDate {
            path: source.to_path_buf(),
            value: date_text.clone(),
            source: e,
        }
    })?;

    let mut records = Vec::new();
    for class_result in doc.class_results {
        let category = normalize_category(
            class_result
                .class
                .and_then(|c| c.name)
                .unwrap_or_default()
                .as_str(),
        );

        for person_result in class_result.person_results {
            let person = person_result.person.unwrap_or_default();
            let (given, family) = match person.name {
                Some(name) => (
                    name.given.unwrap_or_default().trim().to_string(),
                    name.family.unwrap_or_default().trim().to_string(),
                ),
                None => (String::new(), String::new()),
            };
            let external_id = person
                .ids
                .iter()
                .find(|id| id.id_type.as_deref() == Some(FEDERATION_ID_TYPE))
                .and_then(|id| id.value.as_deref())
                .unwrap_or("")
                .trim()
                .to_string();

            let result = person_result.results.into_iter().next();
            let position = result
                .as_ref()
                .and_then(|r| r.position.as_deref())
                .and_then(|text| text.trim().parse::<u32>().ok());
            let status_raw = result.and_then(|r| r.status).unwrap_or_default();

            records.push(ResultRecord {
                category: category.clone(),
                competitor: CompetitorKey {
                    given,
                    family,
                    external_id,
                },
                position,
                points: points.points_for(position),
                status_raw,
            });
        }
    }

    debug!(
        event = %name,
        date = %date,
        records = records.len(),
        "parsed result document"
    );

    Ok(Event {
        name,
        date,
        records,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(xml: &str) -> Result<Event, ResultsError> {
        parse_event_str(xml, Path::new("inline.xml"), &PointsTable::default())
    }

    fn wrap(body: &str) -> String {
        format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<ResultList xmlns="http://www.orienteering.org/datastandard/3.0" iofVersion="3.0">
  <Event>
    <Name>Test Race</Name>
    <StartTime><Date>2024-04-14</Date></StartTime>
  </Event>
  {body}
</ResultList>"#
        )
    }

    #[test]
    fn test_event_metadata() {
        let event = parse(&wrap("")).unwrap();
        assert_eq!(event.name, "Test Race");
        assert_eq!(event.date, NaiveDate::from_ymd_opt(2024, 4, 14).unwrap());
        assert!(event.records.is_empty());
    }

    #[test]
    fn test_missing_date_is_fatal() {
        let xml = r#"<ResultList><Event><Name>No Date</Name></Event></ResultList>"#;
        assert!(matches!(parse(xml), Err(ResultsError::MissingDate { .. })));
    }

    #[test]
    fn test_unparseable_date_is_fatal() {
        let xml = r#"<ResultList>
            <Event><Name>Bad Date</Name><StartTime><Date>sometime in May</Date></StartTime></Event>
        </ResultList>"#;
        assert!(matches!(parse(xml), Err(ResultsError::BadDate { .. })));
    }

    #[test]
    fn test_malformed_xml_is_fatal() {
        assert!(matches!(
            parse("<ResultList><Event>"),
            Err(ResultsError::Xml { .. })
        ));
    }

    #[test]
    fn test_record_fields() {
        let event = parse(&wrap(
            r#"<ClassResult>
              <Class><Name>A - Muzi</Name></Class>
              <PersonResult>
                <Person>
                  <Id type="SVK">1001</Id>
                  <Name><Family> Novák </Family><Given> Peter </Given></Name>
                </Person>
                <Result><Position>1</Position><Status>OK</Status></Result>
              </PersonResult>
            </ClassResult>"#,
        ))
        .unwrap();

        assert_eq!(event.records.len(), 1);
        let record = &event.records[0];
        assert_eq!(record.category, "A - muži");
        assert_eq!(record.competitor.given, "Peter");
        assert_eq!(record.competitor.family, "Novák");
        assert_eq!(record.competitor.external_id, "1001");
        assert_eq!(record.position, Some(1));
        assert_eq!(record.points, 20);
        assert_eq!(record.status_raw, "OK");
    }

    #[test]
    fn test_federation_id_first_match_wins() {
        let event = parse(&wrap(
            r#"<ClassResult>
              <Class><Name>A</Name></Class>
              <PersonResult>
                <Person>
                  <Id type="IOF">999</Id>
                  <Id type="SVK">77</Id>
                  <Id type="SVK">88</Id>
                  <Name><Family>Kováč</Family><Given>Ján</Given></Name>
                </Person>
                <Result><Position>3</Position><Status>OK</Status></Result>
              </PersonResult>
            </ClassResult>"#,
        ))
        .unwrap();
        assert_eq!(event.records[0].competitor.external_id, "77");
    }

    #[test]
    fn test_missing_federation_id_yields_empty_key() {
        let event = parse(&wrap(
            r#"<ClassResult>
              <Class><Name>A</Name></Class>
              <PersonResult>
                <Person>
                  <Id type="IOF">999</Id>
                  <Name><Family>Bielik</Family><Given>Marek</Given></Name>
                </Person>
                <Result><Position>2</Position><Status>OK</Status></Result>
              </PersonResult>
            </ClassResult>"#,
        ))
        .unwrap();
        assert_eq!(event.records[0].competitor.external_id, "");
    }

    #[test]
    fn test_non_numeric_position_tolerated() {
        let event = parse(&wrap(
            r#"<ClassResult>
              <Class><Name>A</Name></Class>
              <PersonResult>
                <Person><Name><Family>X</Family><Given>Y</Given></Name></Person>
                <Result><Position>n/a</Position><Status>OK</Status></Result>
              </PersonResult>
            </ClassResult>"#,
        ))
        .unwrap();
        let record = &event.records[0];
        assert_eq!(record.position, None);
        assert_eq!(record.points, 0);
    }

    #[test]
    fn test_missing_result_element() {
        let event = parse(&wrap(
            r#"<ClassResult>
              <Class><Name>A</Name></Class>
              <PersonResult>
                <Person><Name><Family>X</Family><Given>Y</Given></Name></Person>
              </PersonResult>
            </ClassResult>"#,
        ))
        .unwrap();
        let record = &event.records[0];
        assert_eq!(record.position, None);
        assert_eq!(record.points, 0);
        assert_eq!(record.status_raw, "");
    }

    #[test]
    fn test_position_21_scores_zero() {
        let event = parse(&wrap(
            r#"<ClassResult>
              <Class><Name>A</Name></Class>
              <PersonResult>
                <Person><Name><Family>X</Family><Given>Y</Given></Name></Person>
                <Result><Position>21</Position><Status>OK</Status></Result>
              </PersonResult>
            </ClassResult>"#,
        ))
        .unwrap();
        let record = &event.records[0];
        assert_eq!(record.position, Some(21));
        assert_eq!(record.points, 0);
    }

    #[test]
    fn test_only_first_result_is_scored() {
        let event = parse(&wrap(
            r#"<ClassResult>
              <Class><Name>A</Name></Class>
              <PersonResult>
                <Person><Name><Family>X</Family><Given>Y</Given></Name></Person>
                <Result><Position>2</Position><Status>OK</Status></Result>
                <Result><Position>9</Position><Status>OK</Status></Result>
              </PersonResult>
            </ClassResult>"#,
        ))
        .unwrap();
        assert_eq!(event.records[0].position, Some(2));
        assert_eq!(event.records[0].points, 19);
    }

    #[test]
    fn test_empty_class_name_becomes_empty_key() {
        let event = parse(&wrap(
            r#"<ClassResult>
              <PersonResult>
                <Person><Name><Family>X</Family><Given>Y</Given></Name></Person>
                <Result><Position>1</Position><Status>OK</Status></Result>
              </PersonResult>
            </ClassResult>"#,
        ))
        .unwrap();
        assert_eq!(event.records[0].category, "");
    }
}
