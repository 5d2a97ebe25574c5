use crate::cli::parser::DueAction;
use crate::config::Config;
use crate::core::Session;
use crate::core::due::DueLogic;
use crate::errors::AppResult;
use crate::render;
use crate::ui::messages::success;

pub fn handle(action: &DueAction, cfg: &Config) -> AppResult<()> {
    let mut session = Session::open(cfg)?;

    match action {
        DueAction::Add { text } => {
            let id = DueLogic::add(&mut session.state, text)?;
            session.commit("add", &id, &format!("Due item '{}'", text.trim()))?;
            success(format!("Due item added (id {id})."));
            println!("{}", render::dues(&session.state, &[]));
        }

        DueAction::List => {
            println!("{}", render::dues(&session.state, &[]));
        }

        DueAction::Done { id } => {
            // Display only: nothing is persisted.
            let item = DueLogic::done(&session.state, id)?;
            success(format!("'{}' marked as done.", item.text));
            println!("{}", render::dues(&session.state, std::slice::from_ref(id)));
        }

        DueAction::Delete { id } => {
            let removed = DueLogic::delete(&mut session.state, id)?;
            session.commit("delete", id, &format!("Deleted due item '{}'", removed.text))?;
            success(format!("Due item {id} deleted."));
            println!("{}", render::dues(&session.state, &[]));
        }
    }

    Ok(())
}
