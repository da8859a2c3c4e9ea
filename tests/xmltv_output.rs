// tests/xmltv_output.rs
use serde_json::json;
use tvj_epg::schedule::ProgrammeRecord;
use tvj_epg::xmltv::build_document;
use tvj_epg::AppConfig;

fn records(value: serde_json::Value) -> Vec<ProgrammeRecord> {
    serde_json::from_value(value).expect("records deserialize")
}

#[test]
fn example_record_renders_with_utc_timestamps_and_fallback_description() {
    let cfg = AppConfig::default();
    let recs = records(json!([{
        "startTime": 1_700_000_000_000i64,
        "endTime": 1_700_003_600_000i64,
        "program": {"title": "News"}
    }]));

    let (xml, programmes, skipped) = build_document(&cfg, &recs).unwrap();
    assert_eq!(programmes, 1);
    assert_eq!(skipped, 0);

    assert!(xml.contains(r#"start="20231114221320 +0000""#));
    assert!(xml.contains(r#"stop="20231114231320 +0000""#));
    assert!(xml.contains(r#"channel="TVJ.jm@SD""#));
    assert!(xml.contains(r#"<title lang="en">News</title>"#));
    assert!(xml.contains(r#"<desc lang="en">No description available.</desc>"#));
    // Nothing derivable, so the optional children stay out.
    assert!(!xml.contains("<category"));
    assert!(!xml.contains("<episode-num"));
    assert!(!xml.contains("<date>"));
    assert!(!xml.contains("<length"));
}

#[test]
fn document_carries_declaration_generator_and_channel_block() {
    let cfg = AppConfig::default();
    let recs = records(json!([{"startTime": 0, "endTime": 1000}]));

    let (xml, _, _) = build_document(&cfg, &recs).unwrap();
    assert!(xml.starts_with(r#"<?xml version="1.0" encoding="utf-8"?>"#));
    assert!(xml.contains(r#"<tv generator-info-name="1SpotMedia TVJ EPG (enriched)">"#));
    assert!(xml.contains(r#"<channel id="TVJ.jm@SD">"#));
    assert!(xml.contains("<display-name>Television Jamaica</display-name>"));
    assert!(xml.contains(
        r#"<icon src="https://www.televisionjamaica.com/Portals/0/tvj_logo.png"/>"#
    ));
}

#[test]
fn every_complete_record_emits_one_programme_in_source_order() {
    let cfg = AppConfig::default();
    let recs = records(json!([
        {"startTime": 1000, "endTime": 2000, "title": "Alpha"},
        {"startTime": 2000, "title": "Missing stop"},
        {"startTime": 2000, "endTime": 3000, "title": "Bravo"},
        {"endTime": 4000, "title": "Missing start"},
        {"startTime": 3000, "endTime": 4000, "title": "Charlie"}
    ]));

    let (xml, programmes, skipped) = build_document(&cfg, &recs).unwrap();
    assert_eq!(programmes, 3);
    assert_eq!(skipped, 2);
    assert_eq!(xml.matches("<programme ").count(), 3);
    assert!(!xml.contains("Missing stop"));
    assert!(!xml.contains("Missing start"));

    let alpha = xml.find("Alpha").unwrap();
    let bravo = xml.find("Bravo").unwrap();
    let charlie = xml.find("Charlie").unwrap();
    assert!(alpha < bravo && bravo < charlie);
}

#[test]
fn optional_children_appear_in_fixed_order_when_derivable() {
    let cfg = AppConfig::default();
    let recs = records(json!([{
        "startTime": 1000,
        "endTime": 2000,
        "title": "Documentary",
        "program": {
            "longDescription": "A long look.",
            "displayGenre": "Documentary",
            "tvSeasonNumber": 2,
            "tvSeasonEpisodeNumber": 7,
            "year": 1999,
            "runtime": 2700
        }
    }]));

    let (xml, _, _) = build_document(&cfg, &recs).unwrap();
    assert!(xml.contains(r#"<category lang="en">Documentary</category>"#));
    assert!(xml.contains(r#"<episode-num system="xmltv_ns">1.6.</episode-num>"#));
    assert!(xml.contains("<date>1999</date>"));
    assert!(xml.contains(r#"<length units="seconds">2700</length>"#));

    let order = [
        xml.find("<title").unwrap(),
        xml.find("<desc").unwrap(),
        xml.find("<category").unwrap(),
        xml.find("<episode-num").unwrap(),
        xml.find("<date>").unwrap(),
        xml.find("<length").unwrap(),
    ];
    assert!(order.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn text_content_is_xml_escaped() {
    let cfg = AppConfig::default();
    let recs = records(json!([{
        "startTime": 1000,
        "endTime": 2000,
        "title": "News & Sport <Live>"
    }]));

    let (xml, _, _) = build_document(&cfg, &recs).unwrap();
    assert!(xml.contains("News &amp; Sport &lt;Live&gt;"));
}

#[test]
fn building_twice_from_the_same_records_is_byte_identical() {
    let cfg = AppConfig::default();
    let recs = records(json!([
        {"startTime": 1000, "endTime": 2000, "title": "Alpha"},
        {"startTime": 2000, "endTime": 3000, "program": {"title": "Bravo", "runtime": 600}}
    ]));

    let (first, _, _) = build_document(&cfg, &recs).unwrap();
    let (second, _, _) = build_document(&cfg, &recs).unwrap();
    assert_eq!(first, second);
}
