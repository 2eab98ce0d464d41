use std::fmt;

use crate::models::{Contact, ResumeData};

/// Markdown rendering of a record.
pub struct Markdown<'a>(pub &'a ResumeData);

/// Plain-text rendering of a record.
pub struct PlainText<'a>(pub &'a ResumeData);

fn contact_line(contact: &Contact) -> String {
    [
        contact.email.as_str(),
        contact.phone.as_str(),
        contact.location.as_str(),
    ]
    .into_iter()
    .filter(|part| !part.is_empty())
    .collect::<Vec<_>>()
    .join(" | ")
}

impl fmt::Display for Markdown<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let data = self.0;

        writeln!(f, "# {}\n", data.full_name)?;
        writeln!(f, "## {}\n", data.title)?;
        writeln!(f, "{}", contact_line(&data.contact))?;
        for link in [data.contact.linkedin(), data.contact.website()] {
            if !link.is_empty() {
                writeln!(f, "{link}")?;
            }
        }

        writeln!(f, "\n---\n\n## Summary\n{}", data.summary)?;

        writeln!(f, "\n---\n\n## Experience")?;
        for exp in &data.experience {
            writeln!(f, "\n### {} @ {}\n*{}*\n", exp.role, exp.company, exp.duration)?;
            for line in &exp.description {
                writeln!(f, "- {line}")?;
            }
        }

        writeln!(f, "\n---\n\n## Education")?;
        for edu in &data.education {
            writeln!(f, "\n### {}\n{} | {}", edu.school, edu.degree, edu.year)?;
        }

        writeln!(f, "\n---\n\n## Skills\n{}", data.skills.join(" • "))
    }
}

impl fmt::Display for PlainText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let data = self.0;

        writeln!(f, "{}\n{}\n", data.full_name, data.title)?;
        writeln!(f, "Contact: {}\n", contact_line(&data.contact))?;
        writeln!(f, "Summary:\n{}\n", data.summary)?;

        writeln!(f, "Experience:")?;
        for exp in &data.experience {
            writeln!(f, "{} - {} ({})", exp.role, exp.company, exp.duration)?;
            for line in &exp.description {
                writeln!(f, "  • {line}")?;
            }
            writeln!(f)?;
        }

        writeln!(f, "Education:")?;
        for edu in &data.education {
            writeln!(f, "{} - {} ({})", edu.school, edu.degree, edu.year)?;
        }

        writeln!(f, "\nSkills:\n{}", data.skills.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EducationEntry, ExperienceEntry};

    fn record() -> ResumeData {
        ResumeData {
            full_name: "Ada Lovelace".to_string(),
            title: "Analyst".to_string(),
            contact: Contact {
                email: "ada@example.com".to_string(),
                phone: String::new(),
                location: "London".to_string(),
                linkedin: Some("linkedin.com/in/ada".to_string()),
                website: None,
            },
            summary: "First programmer.".to_string(),
            experience: vec![ExperienceEntry {
                company: "Analytical Engine".to_string(),
                role: "Programmer".to_string(),
                duration: "1842 - 1843".to_string(),
                description: vec!["Wrote Note G".to_string(), "Computed Bernoulli numbers".to_string()],
            }],
            skills: vec!["Mathematics".to_string(), "Poetry".to_string()],
            education: vec![EducationEntry {
                school: "Home".to_string(),
                degree: "Tutoring".to_string(),
                year: "1830".to_string(),
            }],
            ..Default::default()
        }
    }

    #[test]
    fn test_markdown_sections() {
        let md = Markdown(&record()).to_string();
        assert!(md.starts_with("# Ada Lovelace\n\n## Analyst\n\nada@example.com | London\nlinkedin.com/in/ada\n"));
        assert!(md.contains("### Programmer @ Analytical Engine\n*1842 - 1843*\n\n- Wrote Note G\n- Computed Bernoulli numbers\n"));
        assert!(md.contains("### Home\nTutoring | 1830\n"));
        assert!(md.ends_with("## Skills\nMathematics • Poetry\n"));
        assert_eq!(md.matches("\n---\n").count(), 4);
    }

    #[test]
    fn test_plain_text_sections() {
        let txt = PlainText(&record()).to_string();
        assert!(txt.starts_with("Ada Lovelace\nAnalyst\n\nContact: ada@example.com | London\n"));
        assert!(txt.contains("Programmer - Analytical Engine (1842 - 1843)\n  • Wrote Note G\n"));
        assert!(txt.contains("Education:\nHome - Tutoring (1830)\n"));
        assert!(txt.ends_with("Skills:\nMathematics, Poetry\n"));
    }

    #[test]
    fn test_empty_record_still_has_headings() {
        let txt = PlainText(&ResumeData::default()).to_string();
        assert!(txt.contains("Experience:\nEducation:\n"));
    }
}
