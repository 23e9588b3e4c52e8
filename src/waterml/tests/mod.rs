//! Test fixtures and helpers for the WaterML importer
//!
//! Fixture documents mirror the shape served by the time-series endpoint:
//! a collection wrapping one or more measurement series, each carrying
//! default point metadata and a list of time/value points with optional
//! link-style qualifiers.


/// Wrap series bodies in a collection document with namespaces bound at
/// the root
pub(crate) fn document_with_series(series_bodies: &[impl AsRef<str>]) -> String {
    let mut doc = String::from(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<wml2:Collection xmlns:wml2="http://www.opengis.net/waterml/2.0"
                 xmlns:gml="http://www.opengis.net/gml/3.2"
                 xmlns:xlink="http://www.w3.org/1999/xlink">
"#,
    );
    for (index, body) in series_bodies.iter().enumerate() {
        doc.push_str(&format!(
            "  <wml2:observationMember>\n    <wml2:MeasurementTimeseries gml:id=\"TS.{}\">\n{}\n    </wml2:MeasurementTimeseries>\n  </wml2:observationMember>\n",
            index,
            body.as_ref()
        ));
    }
    doc.push_str("</wml2:Collection>\n");
    doc
}

/// Default point metadata declaring a qualifier by display title
pub(crate) fn default_metadata(title: &str) -> String {
    format!(
        r#"      <wml2:defaultPointMetadata>
        <wml2:DefaultTVPMeasurementMetadata>
          <wml2:qualifier xlink:title="{}"/>
        </wml2:DefaultTVPMeasurementMetadata>
      </wml2:defaultPointMetadata>"#,
        title
    )
}

/// A point with a time, a value, and optionally its own qualifier title
pub(crate) fn point(time: &str, value: &str, qualifier_title: Option<&str>) -> String {
    let metadata = match qualifier_title {
        Some(title) => format!(
            "\n          <wml2:metadata>\n            <wml2:TVPMeasurementMetadata>\n              <wml2:qualifier xlink:title=\"{}\"/>\n            </wml2:TVPMeasurementMetadata>\n          </wml2:metadata>",
            title
        ),
        None => String::new(),
    };
    format!(
        "      <wml2:point>\n        <wml2:MeasurementTVP>\n          <wml2:time>{}</wml2:time>\n          <wml2:value>{}</wml2:value>{}\n        </wml2:MeasurementTVP>\n      </wml2:point>",
        time, value, metadata
    )
}
