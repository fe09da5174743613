use askama::Template;

use crate::leads::repo::QuizLead;
use crate::messages::repo::ContactMessage;

#[derive(Template)]
#[template(path = "email/quiz_lead.html")]
struct QuizLeadHtml<'a> {
    name: &'a str,
    email: &'a str,
    company: &'a str,
    project_type: &'a str,
    budget: &'a str,
    timeline: &'a str,
    features: &'a str,
}

#[derive(Template)]
#[template(path = "email/quiz_lead.txt")]
struct QuizLeadText<'a> {
    name: &'a str,
    email: &'a str,
    company: &'a str,
    project_type: &'a str,
    budget: &'a str,
    timeline: &'a str,
    features: &'a str,
}

#[derive(Template)]
#[template(path = "email/contact_form.html")]
struct ContactFormHtml<'a> {
    first_name: &'a str,
    last_name: &'a str,
    email: &'a str,
    company: &'a str,
    project_type: &'a str,
    message: &'a str,
}

#[derive(Template)]
#[template(path = "email/contact_form.txt")]
struct ContactFormText<'a> {
    first_name: &'a str,
    last_name: &'a str,
    email: &'a str,
    company: &'a str,
    project_type: &'a str,
    message: &'a str,
}

pub struct RenderedEmail {
    pub subject: String,
    pub text: String,
    pub html: String,
}

pub fn quiz_lead_email(lead: &QuizLead) -> askama::Result<RenderedEmail> {
    let html = QuizLeadHtml {
        name: &lead.name,
        email: &lead.email,
        company: lead.company.as_deref().unwrap_or(""),
        project_type: &lead.project_type,
        budget: &lead.budget,
        timeline: &lead.timeline,
        features: &lead.features,
    }
    .render()?;
    let text = QuizLeadText {
        name: &lead.name,
        email: &lead.email,
        company: lead.company.as_deref().unwrap_or(""),
        project_type: &lead.project_type,
        budget: &lead.budget,
        timeline: &lead.timeline,
        features: &lead.features,
    }
    .render()?;
    Ok(RenderedEmail {
        subject: format!("New Quiz Lead: {}", lead.name),
        text,
        html,
    })
}

pub fn contact_form_email(msg: &ContactMessage) -> askama::Result<RenderedEmail> {
    let html = ContactFormHtml {
        first_name: &msg.first_name,
        last_name: &msg.last_name,
        email: &msg.email,
        company: msg.company.as_deref().unwrap_or(""),
        project_type: msg.project_type.as_deref().unwrap_or(""),
        message: &msg.message,
    }
    .render()?;
    let text = ContactFormText {
        first_name: &msg.first_name,
        last_name: &msg.last_name,
        email: &msg.email,
        company: msg.company.as_deref().unwrap_or(""),
        project_type: msg.project_type.as_deref().unwrap_or(""),
        message: &msg.message,
    }
    .render()?;
    Ok(RenderedEmail {
        subject: format!("New Contact Message: {} {}", msg.first_name, msg.last_name),
        text,
        html,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::OffsetDateTime;
    use uuid::Uuid;

    fn lead(company: Option<&str>) -> QuizLead {
        QuizLead {
            id: Uuid::new_v4(),
            name: "Alice".into(),
            email: "alice@x.com".into(),
            company: company.map(String::from),
            project_type: "E-commerce".into(),
            budget: "$5k-$10k".into(),
            timeline: "1-2 months".into(),
            features: "Payments".into(),
            status: "new".into(),
            created_at: OffsetDateTime::UNIX_EPOCH,
        }
    }

    #[test]
    fn quiz_email_carries_the_answers() {
        let rendered = quiz_lead_email(&lead(Some("Acme"))).unwrap();
        assert_eq!(rendered.subject, "New Quiz Lead: Alice");
        assert!(rendered.html.contains("alice@x.com"));
        assert!(rendered.html.contains("Acme"));
        assert!(rendered.html.contains("$5k-$10k"));
        assert!(rendered.text.contains("E-commerce"));
    }

    #[test]
    fn quiz_email_omits_missing_company() {
        let rendered = quiz_lead_email(&lead(None)).unwrap();
        assert!(!rendered.html.contains("Company:"));
        assert!(!rendered.text.contains("Company:"));
    }

    #[test]
    fn contact_email_carries_the_message() {
        let msg = ContactMessage {
            id: Uuid::new_v4(),
            first_name: "Bob".into(),
            last_name: "Stone".into(),
            email: "bob@y.org".into(),
            company: None,
            project_type: Some("Mobile App".into()),
            message: "Need a quote for an app.".into(),
            status: "new".into(),
            created_at: OffsetDateTime::UNIX_EPOCH,
        };
        let rendered = contact_form_email(&msg).unwrap();
        assert_eq!(rendered.subject, "New Contact Message: Bob Stone");
        assert!(rendered.html.contains("Need a quote for an app."));
        assert!(rendered.html.contains("Mobile App"));
        assert!(rendered.text.contains("bob@y.org"));
    }

    #[test]
    fn html_is_escaped() {
        let mut l = lead(None);
        l.name = "<script>alert(1)</script>".into();
        let rendered = quiz_lead_email(&l).unwrap();
        assert!(!rendered.html.contains("<script>"));
    }
}
