use anyhow::{Result, bail};
use wk_core::{
    EntryStore, Planner, WeekSelector,
    entry::Entry,
    resolve::is_day_token,
    time_range::{TimeRange, is_time_range},
};

use crate::render::Renderer;

const ADD_USAGE: &str = "usage: wk add [day] <start>-<end> <description>";
const ACTUAL_USAGE: &str = "usage: wk actual <id> <start>-<end>";
const UNPLANNED_USAGE: &str = "usage: wk actual --unplanned [day] <start>-<end> <description>";

/// Positional arguments of `add` and `actual --unplanned`.
#[derive(Debug, PartialEq, Eq)]
pub struct TimedArgs<'a> {
    /// `None` when the first argument already is the time range.
    pub day: Option<&'a str>,
    pub range: &'a str,
    pub text: String,
}

pub fn split_timed<'a>(args: &'a [String], usage: &str) -> Result<TimedArgs<'a>> {
    match args {
        [range, rest @ ..] if is_time_range(range) => Ok(TimedArgs {
            day: None,
            range: range.as_str(),
            text: rest.join(" "),
        }),
        [day, range, rest @ ..] => Ok(TimedArgs {
            day: Some(day.as_str()),
            range: range.as_str(),
            text: rest.join(" "),
        }),
        _ => bail!("{usage}"),
    }
}

/// Positional arguments of `note`: the first word is a day only if it parses as one.
pub fn split_note(args: &[String]) -> (Option<&str>, String) {
    match args {
        [day, rest @ ..] if is_day_token(day) => (Some(day.as_str()), rest.join(" ")),
        _ => (None, args.join(" ")),
    }
}

/// ` [a,b]`, or nothing without tags.
fn tag_suffix(entry: &Entry) -> String {
    if entry.tags.is_empty() {
        String::new()
    } else {
        format!(" [{}]", entry.tags.join(","))
    }
}

fn time_of(entry: &Entry) -> String {
    entry
        .planned()
        .or_else(|| entry.actual())
        .map(|r| r.to_string())
        .unwrap_or_default()
}

pub fn added_message(entry: &Entry) -> String {
    format!(
        "Added: {} {} {}{}",
        entry.day,
        time_of(entry),
        entry.description,
        tag_suffix(entry)
    )
}

pub fn note_message(entry: &Entry) -> String {
    format!(
        "Note added to {}: {}{}",
        entry.day,
        entry.description,
        tag_suffix(entry)
    )
}

pub fn unplanned_message(entry: &Entry) -> String {
    format!(
        "⚡ Unplanned: {} {} {}{}",
        entry.day,
        time_of(entry),
        entry.description,
        tag_suffix(entry)
    )
}

pub fn actual_message(actual: TimeRange) -> String {
    format!("Actual time recorded: {actual}")
}

pub fn add<S: EntryStore>(
    planner: &mut Planner<S>,
    renderer: &Renderer,
    args: &[String],
    tag: Option<&str>,
) -> Result<()> {
    let timed = split_timed(args, ADD_USAGE)?;
    let entry = planner.add_block(timed.day, timed.range, &timed.text, tag)?;
    renderer.print_confirmation(&entry.id, &added_message(&entry));
    Ok(())
}

pub fn note<S: EntryStore>(
    planner: &mut Planner<S>,
    renderer: &Renderer,
    args: &[String],
    tag: Option<&str>,
) -> Result<()> {
    let (day, text) = split_note(args);
    let entry = planner.add_note(day, &text, tag)?;
    renderer.print_confirmation(&entry.id, &note_message(&entry));
    Ok(())
}

pub fn actual<S: EntryStore>(
    planner: &mut Planner<S>,
    renderer: &Renderer,
    unplanned: bool,
    args: &[String],
    tag: Option<&str>,
) -> Result<()> {
    if unplanned {
        let timed = split_timed(args, UNPLANNED_USAGE)?;
        let entry = planner.record_unplanned(timed.day, timed.range, &timed.text, tag)?;
        renderer.print_confirmation(&entry.id, &unplanned_message(&entry));
        return Ok(());
    }

    // Trailing words after the range are ignored.
    let [id, range, ..] = args else {
        bail!("{ACTUAL_USAGE}");
    };
    let actual = planner.record_actual(id, range)?;
    renderer.print_confirmation(id, &actual_message(actual));
    Ok(())
}

pub fn done<S: EntryStore>(planner: &mut Planner<S>, renderer: &Renderer, id: &str) -> Result<()> {
    planner.mark_done(id)?;
    renderer.print_confirmation(id, "✓ Marked done");
    Ok(())
}

pub fn undone<S: EntryStore>(
    planner: &mut Planner<S>,
    renderer: &Renderer,
    id: &str,
) -> Result<()> {
    planner.mark_undone(id)?;
    renderer.print_confirmation(id, "Unmarked done");
    Ok(())
}

pub fn rm<S: EntryStore>(planner: &mut Planner<S>, renderer: &Renderer, id: &str) -> Result<()> {
    planner.remove(id)?;
    renderer.print_removal(id, "Deleted");
    Ok(())
}

/// `--week` wins over `--last`/`--next`; clap already rejects combining them.
pub fn week_selector(last: bool, next: bool, week: Option<&str>) -> Result<WeekSelector> {
    Ok(match week {
        Some(week) => WeekSelector::Explicit(week.parse()?),
        None if last => WeekSelector::Last,
        None if next => WeekSelector::Next,
        None => WeekSelector::Current,
    })
}

pub fn ls<S: EntryStore>(
    planner: &Planner<S>,
    renderer: &Renderer,
    day: Option<&str>,
    selector: WeekSelector,
) -> Result<()> {
    let view = planner.week_view(selector, day)?;
    renderer.print_week(&view);
    Ok(())
}
