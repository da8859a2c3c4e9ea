// src/xmltv.rs
//
// Deterministic XMLTV rendering: identical records always serialize to
// identical bytes, so re-running against unchanged upstream data rewrites
// the file with the same content.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::config::AppConfig;
use crate::schedule::ProgrammeRecord;

pub const GENERATOR_INFO: &str = "1SpotMedia TVJ EPG (enriched)";

/// XMLTV timestamp, always rendered in UTC with the fixed `+0000` offset.
pub fn xmltv_timestamp(dt: DateTime<Utc>) -> String {
    dt.format("%Y%m%d%H%M%S +0000").to_string()
}

/// Build the full document: declaration, `<tv>` root, one `<channel>`
/// block, then one `<programme>` per record that carries both timestamps,
/// in source order. Returns the XML plus (written, skipped) counts.
pub fn build_document(
    cfg: &AppConfig,
    records: &[ProgrammeRecord],
) -> Result<(String, usize, usize)> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;

    let mut tv = BytesStart::new("tv");
    tv.push_attribute(("generator-info-name", GENERATOR_INFO));
    writer.write_event(Event::Start(tv))?;

    let mut channel = BytesStart::new("channel");
    channel.push_attribute(("id", cfg.tvg_id.as_str()));
    writer.write_event(Event::Start(channel))?;
    writer
        .create_element("display-name")
        .write_text_content(BytesText::new(&cfg.channel_name))?;
    writer
        .create_element("icon")
        .with_attribute(("src", cfg.channel_icon.as_str()))
        .write_empty()?;
    writer.write_event(Event::End(BytesEnd::new("channel")))?;

    let mut programmes = 0usize;
    let mut skipped = 0usize;
    for record in records {
        let (Some(start), Some(stop)) = (record.start_utc(), record.end_utc()) else {
            skipped += 1;
            continue;
        };
        write_programme(&mut writer, &cfg.tvg_id, record, start, stop)?;
        programmes += 1;
    }

    writer.write_event(Event::End(BytesEnd::new("tv")))?;

    let xml = String::from_utf8(writer.into_inner()).context("serialized XMLTV is not UTF-8")?;
    Ok((xml, programmes, skipped))
}

fn write_programme(
    writer: &mut Writer<Vec<u8>>,
    tvg_id: &str,
    record: &ProgrammeRecord,
    start: DateTime<Utc>,
    stop: DateTime<Utc>,
) -> Result<()> {
    let start_attr = xmltv_timestamp(start);
    let stop_attr = xmltv_timestamp(stop);

    let mut programme = BytesStart::new("programme");
    programme.push_attribute(("start", start_attr.as_str()));
    programme.push_attribute(("stop", stop_attr.as_str()));
    programme.push_attribute(("channel", tvg_id));
    writer.write_event(Event::Start(programme))?;

    writer
        .create_element("title")
        .with_attribute(("lang", "en"))
        .write_text_content(BytesText::new(&record.display_title()))?;
    writer
        .create_element("desc")
        .with_attribute(("lang", "en"))
        .write_text_content(BytesText::new(&record.display_description()))?;

    if let Some(category) = record.category() {
        writer
            .create_element("category")
            .with_attribute(("lang", "en"))
            .write_text_content(BytesText::new(&category))?;
    }
    if let Some(episode) = record.episode_num() {
        writer
            .create_element("episode-num")
            .with_attribute(("system", "xmltv_ns"))
            .write_text_content(BytesText::new(&episode))?;
    }
    if let Some(year) = record.air_year() {
        writer
            .create_element("date")
            .write_text_content(BytesText::new(&year.to_string()))?;
    }
    if let Some(seconds) = record.runtime_seconds() {
        writer
            .create_element("length")
            .with_attribute(("units", "seconds"))
            .write_text_content(BytesText::new(&seconds.to_string()))?;
    }

    writer.write_event(Event::End(BytesEnd::new("programme")))?;
    Ok(())
}

/// Plain overwrite of the output file; no atomic rename.
pub fn write_document(path: &Path, xml: &str) -> Result<()> {
    fs::write(path, xml).with_context(|| format!("writing XMLTV to {}", path.display()))
}
