//! Plain-text reports for analyses, assessments and the cycle table.

use std::fmt::{Display, Formatter, Result as FmtResult};

use mewa_base::{CycleProfile, Mewa, SixtyCycleTables};

use crate::analysis::FullAnalysis;
use crate::obstacle_types::{ClashDirection, Obstacle, ObstacleDetails};
use crate::prosperity_types::ProsperityAssessment;

const RULE_WIDTH: usize = 60;

fn sign_line(p: &CycleProfile) -> String {
    format!(
        "{} ({}) - {} {} {}",
        p.cycle_name,
        p.cycle_name.glyph_name(),
        p.element.name(),
        p.polarity.name(),
        p.animal.name()
    )
}

fn mewa_cell(m: &Mewa) -> String {
    format!("{} {} ({})", m.number, m.color.name(), m.element.name())
}

fn details_line(o: &Obstacle) -> String {
    match o.details {
        ObstacleDetails::Regional {
            year_body_mewa,
            reference_mewa,
            class,
        } => format!(
            "year body {year_body_mewa} = darkness mewa {reference_mewa} ({})",
            class.label()
        ),
        ObstacleDetails::Home {
            year_body_mewa,
            subject_body_mewa,
        } => format!("year body {year_body_mewa} = subject body {subject_body_mewa}"),
        ObstacleDetails::Bedding {
            year_body_color,
            subject_body_color,
        } => format!(
            "year body color {} = subject body color {}",
            year_body_color.name(),
            subject_body_color.name()
        ),
        ObstacleDetails::Door {
            element_clash,
            common_color,
        } => {
            let mut parts = Vec::with_capacity(2);
            if let Some(c) = element_clash {
                let (from, to) = match c.direction {
                    ClashDirection::YearDestroysSubject => (c.year_element, c.subject_element),
                    ClashDirection::SubjectDestroysYear => (c.subject_element, c.year_element),
                };
                parts.push(format!("{} destroys {}", from.name(), to.name()));
            }
            if let Some(color) = common_color {
                parts.push(format!("life, body and power all {}", color.name()));
            }
            parts.join("; ")
        }
    }
}

/// Text report of a [`FullAnalysis`].
pub struct FullAnalysisReport<'a>(pub &'a FullAnalysis);

impl Display for FullAnalysisReport<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let a = self.0;
        let p = &a.subject_profile;
        let m = &a.subject_mewas;
        let oa = &a.obstacle_analysis;
        let rule = "=".repeat(RULE_WIDTH);

        writeln!(f, "{rule}")?;
        writeln!(f, "NINE-PALACE ANALYSIS REPORT")?;
        writeln!(f, "{rule}")?;
        writeln!(f)?;
        writeln!(f, "Birth Year: {}", p.year)?;
        writeln!(f, "Sign: {}", sign_line(p))?;
        writeln!(f, "Rabjung Position: {}", p.cycle_position)?;
        writeln!(f)?;
        writeln!(f, "Mewa Numbers:")?;
        writeln!(f, "  Life:  {}", mewa_cell(&m.life))?;
        writeln!(f, "  Body:  {}", mewa_cell(&m.body))?;
        writeln!(f, "  Power: {}", mewa_cell(&m.power))?;
        writeln!(f)?;
        writeln!(f, "Obstacle Analysis for {}:", oa.reference_profile.year)?;
        writeln!(f, "{}", "-".repeat(RULE_WIDTH - 10))?;
        writeln!(f, "Year Sign: {}", sign_line(&oa.reference_profile))?;
        writeln!(f, "Year Body Mewa: {}", mewa_cell(&oa.reference_mewas.body))?;
        writeln!(f)?;

        if oa.obstacles.is_empty() {
            writeln!(f, "No obstacles detected.")?;
        } else {
            writeln!(f, "{} obstacle(s) detected:", oa.count())?;
            for (i, o) in oa.obstacles.iter().enumerate() {
                writeln!(f)?;
                writeln!(f, "{}. {} ({})", i + 1, o.kind.name(), o.kind.code())?;
                writeln!(f, "   Interpretation: {}", o.interpretation)?;
                writeln!(f, "   Details: {}", details_line(o))?;
            }
        }

        writeln!(f)?;
        writeln!(f, "{rule}")?;
        writeln!(f, "Generated: {}", a.generated_at.to_rfc3339())?;
        write!(f, "Version: {}", a.version)
    }
}

/// Text report of a [`ProsperityAssessment`].
pub struct ProsperityReport<'a>(pub &'a ProsperityAssessment);

impl Display for ProsperityReport<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let a = self.0;
        let (start, end) = a.hour_animal.hour_span();
        writeln!(f, "Event: {} ({})", a.event_type.name(), a.event_type.glyph())?;
        writeln!(f, "Date: {}", a.event_date)?;
        writeln!(f, "Hour: {:02}:00", a.event_hour)?;
        writeln!(f, "Year Sign: {}", sign_line(&a.event_profile))?;
        writeln!(
            f,
            "Hour Animal: {} ({start:02}:00-{end:02}:59)",
            a.hour_animal.name()
        )?;
        writeln!(f, "Day Element: {}", a.day_element.name())?;
        writeln!(f, "Hour Element: {}", a.hour_element.name())?;
        writeln!(f, "Assessment: {}", a.rating)?;
        write!(f, "Reasoning: {}", a.reasoning.join(" | "))
    }
}

/// The 60-row cycle table with life/body/power rotation values.
pub struct CycleTableReport<'a>(pub &'a SixtyCycleTables);

impl Display for CycleTableReport<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        writeln!(f, "{:>2}  {:<18} {:<4} L B P", "#", "Name", "")?;
        for (i, e) in self.0.entries().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(
                f,
                "{:>2}  {:<18} {:<4} {} {} {}",
                e.position,
                e.name.to_string(),
                e.name.glyph_name(),
                e.life,
                e.body,
                e.power
            )?;
        }
        Ok(())
    }
}

pub fn render_full_analysis(analysis: &FullAnalysis) -> String {
    FullAnalysisReport(analysis).to_string()
}

pub fn render_prosperity(assessment: &ProsperityAssessment) -> String {
    ProsperityReport(assessment).to_string()
}

pub fn render_cycle_table(tables: &SixtyCycleTables) -> String {
    CycleTableReport(tables).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use mewa_base::cycle_tables;

    #[test]
    fn cycle_table_has_header_and_sixty_rows() {
        let text = render_cycle_table(cycle_tables().unwrap());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 61);
        assert!(lines[1].contains("WoodYangRat"));
        assert!(lines[1].ends_with("1 4 7"));
    }
}
