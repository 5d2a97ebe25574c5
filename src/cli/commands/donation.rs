use crate::cli::parser::DonationAction;
use crate::config::Config;
use crate::core::Session;
use crate::core::donation::DonationLogic;
use crate::errors::AppResult;
use crate::render;
use crate::ui::messages::{info, success};
use crate::ui::modal::{Field, Modal, prefill};
use crate::utils::format_money;
use crate::utils::prompt::confirm;

fn show(session: &Session, cfg: &Config) {
    println!("{}", render::donations(&session.state, &cfg.currency_symbol));
    println!("{}", render::donation_stats(&session.state, &cfg.currency_symbol));
}

pub fn handle(action: &DonationAction, cfg: &Config) -> AppResult<()> {
    let mut session = Session::open(cfg)?;

    match action {
        DonationAction::Add {
            donor,
            amount,
            channel,
            date,
        } => {
            let channel_code = channel.map(|c| c.as_str().to_string());
            let fields = [
                Field::new("donor", "Donor name"),
                Field::new("amount", "Amount"),
                Field::new("date", "Date (YYYY-MM-DD)"),
                Field::new("channel", "Channel (GCash, Bank, Cash)").with_default("GCash"),
            ];
            let given = prefill(&[
                ("donor", donor.as_ref()),
                ("amount", amount.as_ref()),
                ("date", date.as_ref()),
                ("channel", channel_code.as_ref()),
            ]);

            let mut modal = Modal::stdio();
            let form = modal.open("Add Donation", &fields, given)?;

            let id = DonationLogic::create(
                &mut session.state,
                form.get("donor"),
                form.get("amount"),
                form.get("channel"),
                form.get("date"),
            )?;

            let amount_text = session
                .state
                .donations
                .find(&id)
                .map(|d| format_money(&cfg.currency_symbol, d.amount))
                .unwrap_or_default();
            session.commit(
                "add",
                &id,
                &format!("Donation of {} from {}", amount_text, form.get("donor")),
            )?;
            modal.close();

            success(format!("Donation recorded (id {id})."));
            show(&session, cfg);
        }

        DonationAction::List => {
            println!("{}", render::donations(&session.state, &cfg.currency_symbol));
        }

        DonationAction::Delete { id } => {
            let removed = DonationLogic::delete(&mut session.state, id)?;
            session.commit(
                "delete",
                id,
                &format!(
                    "Deleted donation of {} from {}",
                    format_money(&cfg.currency_symbol, removed.amount),
                    removed.donor
                ),
            )?;
            success(format!("Donation {id} deleted."));
            show(&session, cfg);
        }

        DonationAction::Clear { yes } => {
            if !*yes && !confirm("Clear all donations? This action is irreversible.") {
                info("Operation cancelled.");
                return Ok(());
            }
            let n = DonationLogic::clear_all(&mut session.state);
            session.commit("clear", "donations", &format!("Cleared {n} donations"))?;
            success(format!("{n} donations cleared."));
            show(&session, cfg);
        }

        DonationAction::Stats => {
            println!("{}", render::donation_stats(&session.state, &cfg.currency_symbol));
        }
    }

    Ok(())
}
