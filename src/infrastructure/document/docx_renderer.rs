use std::io::Cursor;

use docx_rs::{Docx, Paragraph, Run};

use crate::application::ports::{RenderError, ReportRenderer};
use crate::domain::{FeedbackReport, Rating};

// Run sizes are half-points: 24 is the unified 12pt body, 28 the title.
const BODY_SIZE: usize = 24;
const TITLE_SIZE: usize = 28;
const RATING_COLOR: &str = "FF0000";

/// Assembles the "Fix My Call" report: bold section headers, every rating
/// option shown with the awarded one in red, notes beneath each score, next
/// steps, overall score, trainer sign-off.
pub struct DocxRenderer {
    trainer_name: String,
}

impl DocxRenderer {
    pub fn new(trainer_name: impl Into<String>) -> Self {
        Self {
            trainer_name: trainer_name.into(),
        }
    }

    fn header(text: &str) -> Paragraph {
        Paragraph::new().add_run(Run::new().add_text(text).bold().size(BODY_SIZE))
    }

    fn body(text: &str) -> Paragraph {
        Paragraph::new().add_run(Run::new().add_text(text).size(BODY_SIZE))
    }

    fn rating_line(awarded: Rating) -> Paragraph {
        let mut line = Paragraph::new();
        for (i, option) in Rating::OPTIONS.iter().enumerate() {
            if i > 0 {
                line = line.add_run(Run::new().add_text(" | ").size(BODY_SIZE));
            }
            let mut run = Run::new().add_text(option.as_str()).size(BODY_SIZE);
            if *option == awarded {
                run = run.bold().color(RATING_COLOR);
            }
            line = line.add_run(run);
        }
        line
    }
}

impl ReportRenderer for DocxRenderer {
    fn render(&self, report: &FeedbackReport) -> Result<Vec<u8>, RenderError> {
        let title = format!(
            "Fix My Call - {} - {}",
            report.report_date(),
            report.advisor_name
        );

        let mut docx = Docx::new().default_size(BODY_SIZE).add_paragraph(
            Paragraph::new().add_run(Run::new().add_text(title).bold().size(TITLE_SIZE)),
        );

        for section in &report.sections {
            docx = docx
                .add_paragraph(Self::header(&section.name))
                .add_paragraph(Self::rating_line(section.rating))
                .add_paragraph(Self::body(&section.notes));
        }

        if !report.next_steps.is_empty() {
            docx = docx.add_paragraph(Self::header("Next Steps"));
            for step in &report.next_steps {
                docx = docx.add_paragraph(Self::body(&format!("- {}", step)));
            }
        }

        if !report.transcript.is_empty() {
            docx = docx
                .add_paragraph(Self::header("Transcript"))
                .add_paragraph(Self::body(&report.transcript));
        }

        docx = docx
            .add_paragraph(Self::header(&format!(
                "Overall Score: {}%",
                report.overall_score()
            )))
            .add_paragraph(Self::body(&format!(
                "Your Reviewing Trainer: {}",
                self.trainer_name
            )));

        let mut buffer = Cursor::new(Vec::new());
        docx.build()
            .pack(&mut buffer)
            .map_err(|e| RenderError::AssemblyFailed(e.to_string()))?;

        let bytes = buffer.into_inner();
        if bytes.is_empty() {
            return Err(RenderError::AssemblyFailed(
                "empty document produced".to_string(),
            ));
        }

        tracing::debug!(bytes = bytes.len(), "Report document assembled");

        Ok(bytes)
    }
}
