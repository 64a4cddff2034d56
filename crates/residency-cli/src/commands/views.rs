//! Row types and detail views shared by several commands.

use serde::Serialize;
use tabled::Tabled;

use residency_entity::journal::{Journal, PunchKind};
use residency_service::ReviewedJournal;
use residency_service::journal::{WorkSession, day_summary};

use crate::output::{self, OutputFormat, time_or_placeholder};

/// Journal display row for table output
#[derive(Debug, Serialize, Tabled)]
pub struct JournalRow {
    /// Journal ID
    pub id: String,
    /// Day
    pub date: String,
    /// Status
    pub status: String,
    /// First entry
    pub entry: String,
    /// First exit
    pub exit: String,
    /// Day activities
    pub activities: String,
}

impl From<&Journal> for JournalRow {
    fn from(j: &Journal) -> Self {
        Self {
            id: j.id.to_string(),
            date: j.date.to_string(),
            status: j.status.label().to_string(),
            entry: time_or_placeholder(j.first_punch_time(PunchKind::Entry)),
            exit: time_or_placeholder(j.first_punch_time(PunchKind::Exit)),
            activities: j
                .day_activities()
                .map(|a| a.label())
                .collect::<Vec<_>>()
                .join(", "),
        }
    }
}

/// Review queue row
#[derive(Debug, Serialize, Tabled)]
pub struct ReviewRow {
    /// Journal ID
    pub id: String,
    /// Resident
    pub resident: String,
    /// Day
    pub date: String,
    /// Status
    pub status: String,
    /// Entry / exit
    pub hours: String,
    /// Validator note
    pub note: String,
}

impl From<&ReviewedJournal> for ReviewRow {
    fn from(r: &ReviewedJournal) -> Self {
        let j = &r.journal;
        Self {
            id: j.id.to_string(),
            resident: r.resident_name.clone(),
            date: j.date.to_string(),
            status: j.status.label().to_string(),
            hours: format!(
                "{} - {}",
                time_or_placeholder(j.first_punch_time(PunchKind::Entry)),
                time_or_placeholder(j.first_punch_time(PunchKind::Exit))
            ),
            note: j.validator_note.clone().unwrap_or_default(),
        }
    }
}

#[derive(Debug, Serialize, Tabled)]
struct SessionRow {
    entry: String,
    breaks: String,
    exit: String,
    worked: String,
}

impl From<&WorkSession> for SessionRow {
    fn from(s: &WorkSession) -> Self {
        Self {
            entry: s.entry.to_string(),
            breaks: s
                .breaks
                .iter()
                .map(|b| format!("{} - {}", b.start, b.end.map_or("...".to_string(), |e| e.to_string())))
                .collect::<Vec<_>>()
                .join(", "),
            exit: time_or_placeholder(s.exit),
            worked: s.worked.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Tabled)]
struct ActivityRow {
    activity: String,
    detail: String,
}

#[derive(Serialize)]
struct JournalDetail<'a> {
    journal: &'a Journal,
    summary: residency_service::journal::DaySummary,
}

/// Print a journal with its reconstructed sessions
pub fn print_journal_detail(journal: &Journal, format: OutputFormat) {
    let detail = JournalDetail {
        journal,
        summary: day_summary(journal),
    };
    output::print_item(&detail, format, |d| {
        let j = d.journal;
        println!("Journal {}", j.id);
        output::print_kv("Date", &j.date.to_string());
        output::print_kv("Status", j.status.label());
        if let Some(justification) = &j.general_justification {
            output::print_kv("Justification", justification);
        }
        if let Some(note) = &j.validator_note {
            output::print_kv("Validator note", note);
        }
        if let Some(when) = j.validation_date {
            output::print_kv("Reviewed at", &when.format("%d/%m/%Y %H:%M").to_string());
        }
        println!();

        let punches: Vec<(usize, String, String)> = j
            .normal_punches()
            .iter()
            .enumerate()
            .map(|(i, p)| (i, p.time.to_string(), p.kind.label().to_string()))
            .collect();
        if !punches.is_empty() {
            println!("Punches");
            for (i, time, kind) in punches {
                println!("  [{i}] {time}  {kind}");
            }
            println!();
        }

        let sessions: Vec<SessionRow> = d.summary.sessions.iter().map(SessionRow::from).collect();
        if !sessions.is_empty() {
            println!("Sessions");
            output::print_list(&sessions, OutputFormat::Table);
            let total = d.summary.total_minutes;
            output::print_kv("Total worked", &format!("{}h {}m", total / 60, total % 60));
            println!();
        }

        let activities: Vec<ActivityRow> = d
            .summary
            .day_activities
            .iter()
            .map(|a| ActivityRow {
                activity: a.label().to_string(),
                detail: a.detail().unwrap_or_default().to_string(),
            })
            .collect();
        if !activities.is_empty() {
            println!("Day activities");
            output::print_list(&activities, OutputFormat::Table);
        }
    });
}
