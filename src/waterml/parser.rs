//! Core WaterML parser implementation
//!
//! Streams the document once, dispatching on element local names. Each
//! point collects its leaf-valued descendants into a flat field map; a
//! qualifier expressed as a controlled-vocabulary link contributes its
//! display title instead of inline text. Points with at most one usable
//! field are placeholders and are discarded.

use std::collections::{BTreeSet, HashMap};

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use tracing::{debug, info, warn};

use super::qualifier::resolve_qualifier;
use super::timestamp::parse_point_timestamp;
use crate::constants::{ESTIMATED_FLAG_TOKEN, NO_DATA_VALUE};
use crate::error::{NwisError, Result};
use crate::models::TimeSeriesPoint;

/// Element local names with meaning to the importer
const SERIES_ELEMENT: &str = "MeasurementTimeseries";
const POINT_ELEMENT: &str = "point";
const DEFAULT_METADATA_ELEMENT: &str = "defaultPointMetadata";
const QUALIFIER_ELEMENT: &str = "qualifier";
const TIME_FIELD: &str = "time";
const VALUE_FIELD: &str = "value";

/// Parse a WaterML document into point observations
///
/// Fails only when the input is not well-formed markup. A document with
/// zero usable points yields an empty sequence; the caller classifies
/// that outcome. Point order follows the document; no re-sorting.
pub fn parse_waterml(raw: &str) -> Result<Vec<TimeSeriesPoint>> {
    let mut reader = Reader::from_str(raw);
    reader.config_mut().trim_text(true);

    let mut stack: Vec<String> = Vec::new();
    let mut saw_root = false;
    let mut in_series = false;
    let mut in_default_metadata = false;
    let mut in_point = false;

    let mut default_qualifier: Option<String> = None;
    let mut current: HashMap<String, String> = HashMap::new();
    let mut raw_points: Vec<HashMap<String, String>> = Vec::new();
    let mut total_points = 0usize;
    let mut points_discarded = 0usize;

    loop {
        match reader.read_event()? {
            Event::Start(element) => {
                saw_root = true;
                let name = local_name_of(&element);
                match name.as_str() {
                    SERIES_ELEMENT => in_series = true,
                    DEFAULT_METADATA_ELEMENT if in_series => in_default_metadata = true,
                    POINT_ELEMENT if in_series => {
                        in_point = true;
                        current = HashMap::new();
                    }
                    QUALIFIER_ELEMENT => {
                        collect_linked_qualifier(
                            &element,
                            in_point,
                            in_default_metadata,
                            &mut current,
                            &mut default_qualifier,
                        );
                    }
                    _ => {}
                }
                stack.push(name);
            }
            Event::Empty(element) => {
                saw_root = true;
                if local_name_of(&element) == QUALIFIER_ELEMENT {
                    collect_linked_qualifier(
                        &element,
                        in_point,
                        in_default_metadata,
                        &mut current,
                        &mut default_qualifier,
                    );
                }
            }
            Event::Text(text) => {
                let Ok(text) = text.unescape() else {
                    continue;
                };
                let text = text.trim();
                if text.is_empty() {
                    continue;
                }
                if in_point {
                    if let Some(element) = stack.last() {
                        current.entry(element.clone()).or_insert_with(|| text.to_string());
                    }
                } else if in_default_metadata
                    && stack.last().map(String::as_str) == Some(QUALIFIER_ELEMENT)
                    && default_qualifier.is_none()
                {
                    default_qualifier = Some(text.to_string());
                }
            }
            Event::End(element) => {
                let name = String::from_utf8_lossy(element.local_name().as_ref()).to_string();
                match name.as_str() {
                    SERIES_ELEMENT => in_series = false,
                    DEFAULT_METADATA_ELEMENT => in_default_metadata = false,
                    POINT_ELEMENT if in_point => {
                        in_point = false;
                        total_points += 1;
                        if current.len() > 1 {
                            raw_points.push(std::mem::take(&mut current));
                        } else {
                            points_discarded += 1;
                        }
                    }
                    _ => {}
                }
                stack.pop();
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if !saw_root {
        return Err(NwisError::xml_format("document has no root element"));
    }

    let field_union: BTreeSet<&String> = raw_points.iter().flat_map(|p| p.keys()).collect();
    debug!("Observed point fields: {:?}", field_union);

    let mut points = Vec::with_capacity(raw_points.len());
    let mut points_untimed = 0usize;
    for fields in &raw_points {
        let Some(instant) = fields
            .get(TIME_FIELD)
            .and_then(|raw_time| parse_point_timestamp(raw_time))
        else {
            points_untimed += 1;
            continue;
        };

        points.push(TimeSeriesPoint {
            timestamp: instant,
            value: parse_point_value(fields.get(VALUE_FIELD).map(String::as_str)),
            qualifier: resolve_qualifier(
                fields.get(QUALIFIER_ELEMENT).map(String::as_str),
                default_qualifier.as_deref(),
            ),
        });
    }

    if points_discarded > 0 || points_untimed > 0 {
        warn!(
            "Dropped {} placeholder points and {} points without a usable timestamp",
            points_discarded, points_untimed
        );
    }
    info!(
        "Parsed {} observations from {} point nodes",
        points.len(),
        total_points
    );

    Ok(points)
}

/// Parse a WaterML document from raw bytes
///
/// Convenience entry point for callers holding an undecoded response body.
pub fn parse_waterml_bytes(raw: &[u8]) -> Result<Vec<TimeSeriesPoint>> {
    let text = std::str::from_utf8(raw).map_err(|e| NwisError::encoding(e.to_string()))?;
    parse_waterml(text)
}

fn local_name_of(element: &BytesStart) -> String {
    String::from_utf8_lossy(element.local_name().as_ref()).to_string()
}

/// Record a link-style qualifier's display title where it belongs
///
/// The qualifier element usually carries no inline text; the code lives
/// in its `xlink:title` attribute. Inline text, where present, is picked
/// up by the text handler instead and the first value found wins.
fn collect_linked_qualifier(
    element: &BytesStart,
    in_point: bool,
    in_default_metadata: bool,
    current: &mut HashMap<String, String>,
    default_qualifier: &mut Option<String>,
) {
    let Some(title) = link_title(element) else {
        return;
    };
    if in_point {
        current
            .entry(QUALIFIER_ELEMENT.to_string())
            .or_insert(title);
    } else if in_default_metadata && default_qualifier.is_none() {
        *default_qualifier = Some(title);
    }
}

/// Extract the display title of a controlled-vocabulary link
fn link_title(element: &BytesStart) -> Option<String> {
    element.attributes().flatten().find_map(|attribute| {
        if attribute.key.local_name().as_ref() == b"title" {
            attribute
                .unescape_value()
                .ok()
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        } else {
            None
        }
    })
}

/// Normalize a point's value text
///
/// The estimated-flag token can arrive merged into the value text; it is
/// stripped before the numeric parse. Absent or unusable values take the
/// no-data sentinel.
fn parse_point_value(raw: Option<&str>) -> f64 {
    match raw {
        Some(text) => {
            let cleaned = text.replace(ESTIMATED_FLAG_TOKEN, "");
            let trimmed = cleaned.trim();
            if trimmed.is_empty() {
                NO_DATA_VALUE
            } else {
                trimmed.parse().unwrap_or(NO_DATA_VALUE)
            }
        }
        None => NO_DATA_VALUE,
    }
}
