use crate::cli::parser::AdoptionAction;
use crate::config::Config;
use crate::core::Session;
use crate::core::adoption::AdoptionLogic;
use crate::errors::{AppError, AppResult};
use crate::models::{AdoptionFilter, Record};
use crate::render;
use crate::ui::messages::{info, success};
use crate::ui::modal::{Field, Modal, prefill};

/// Re-render the views that depend on adoptions.
fn show(session: &Session, cfg: &Config) {
    let filter = cfg.adoption_filter_or_all();
    println!("{}", render::adoptions(&session.state, filter));
    println!("{}", render::adoption_queue(&session.state, cfg.queue_limit));
}

pub fn handle(action: &AdoptionAction, cfg: &Config) -> AppResult<()> {
    let mut session = Session::open(cfg)?;

    match action {
        AdoptionAction::Add {
            applicant,
            animal,
            date,
        } => {
            let fields = [
                Field::new("applicant", "Applicant full name"),
                Field::new("animal", "Animal (e.g., Buddy the Dog)"),
                Field::new("date", "Submitted (YYYY-MM-DD)"),
            ];
            let given = prefill(&[
                ("applicant", applicant.as_ref()),
                ("animal", animal.as_ref()),
                ("date", date.as_ref()),
            ]);

            let mut modal = Modal::stdio();
            let form = modal.open("New Adoption Application", &fields, given)?;

            let id = AdoptionLogic::create(
                &mut session.state,
                form.get("applicant"),
                form.get("animal"),
                form.get("date"),
            )?;
            session.commit(
                "add",
                &id,
                &format!("Adoption application by {}", form.get("applicant")),
            )?;
            modal.close();

            success(format!("Adoption application created (id {id})."));
            show(&session, cfg);
        }

        AdoptionAction::List { filter: requested } => {
            let f = match requested {
                Some(code) => AdoptionFilter::from_code(code)
                    .ok_or_else(|| AppError::InvalidStatus(code.clone()))?,
                None => cfg.adoption_filter()?,
            };
            println!("{}", render::adoptions(&session.state, f));
        }

        AdoptionAction::Approve { id } => {
            let changed = AdoptionLogic::approve(&mut session.state, id)?;
            if changed {
                session.commit("approve", id, "Adoption approved")?;
                success(format!("Adoption {id} approved."));
            } else {
                info(format!("Adoption {id} was already approved."));
            }
            show(&session, cfg);
        }

        AdoptionAction::Reject { id } => {
            let changed = AdoptionLogic::reject(&mut session.state, id)?;
            if changed {
                session.commit("reject", id, "Adoption rejected")?;
                success(format!("Adoption {id} rejected."));
            } else {
                info(format!("Adoption {id} was already rejected."));
            }
            show(&session, cfg);
        }

        AdoptionAction::Delete { id } => {
            let removed = AdoptionLogic::delete(&mut session.state, id)?;
            session.commit(
                "delete",
                removed.id(),
                &format!("Deleted adoption of {} by {}", removed.animal, removed.applicant),
            )?;
            success(format!("Adoption {id} deleted."));
            show(&session, cfg);
        }
    }

    Ok(())
}
