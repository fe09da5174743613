use tracing::{error, instrument};

use crate::leads::repo::QuizLead;
use crate::messages::repo::ContactMessage;
use crate::notify::repo::EmailNotification;
use crate::notify::templates::{contact_form_email, quiz_lead_email, RenderedEmail};
use crate::state::AppState;

pub const TEMPLATE_QUIZ_LEAD: &str = "quiz_lead";
pub const TEMPLATE_CONTACT_FORM: &str = "contact_form";

/// Notify the site owner about a new quiz lead. Detached from the request;
/// every failure is logged and swallowed.
pub fn spawn_quiz_lead_notification(state: AppState, lead: QuizLead) {
    tokio::spawn(async move {
        match quiz_lead_email(&lead) {
            Ok(rendered) => deliver(&state, TEMPLATE_QUIZ_LEAD, rendered).await,
            Err(e) => error!(error = %e, "quiz lead template render failed"),
        }
    });
}

pub fn spawn_contact_notification(state: AppState, message: ContactMessage) {
    tokio::spawn(async move {
        match contact_form_email(&message) {
            Ok(rendered) => deliver(&state, TEMPLATE_CONTACT_FORM, rendered).await,
            Err(e) => error!(error = %e, "contact template render failed"),
        }
    });
}

#[instrument(skip(state, rendered))]
async fn deliver(state: &AppState, template_type: &str, rendered: RenderedEmail) {
    let recipient = state.config.notify.recipient.clone();

    let record_id =
        match EmailNotification::insert_pending(&state.db, &recipient, template_type).await {
            Ok(id) => Some(id),
            Err(e) => {
                error!(error = %e, "failed to record pending notification");
                None
            }
        };

    let outcome = state
        .mailer
        .send(&recipient, &rendered.subject, &rendered.text, &rendered.html)
        .await;

    let Some(id) = record_id else { return };
    let update = match &outcome {
        Ok(()) => EmailNotification::mark_sent(&state.db, id).await,
        Err(e) => {
            error!(error = %e, template_type, "notification delivery failed");
            EmailNotification::mark_failed(&state.db, id).await
        }
    };
    if let Err(e) = update {
        error!(error = %e, notification_id = %id, "failed to update notification status");
    }
}
