//! Interactive session controller
//!
//! Top-level state machine: onboarding (name, age), then the main menu
//! loop dispatching to the feature handlers until the user exits. The
//! console, task store and assistant gateway are injected capabilities, so
//! the whole machine runs against scripted input in tests.

pub mod input;
pub mod messages;

use anyhow::Result;
use tracing::{debug, warn};

use crate::assistant::{AiError, AssistantGateway};
use crate::console::{InputError, LineIo};
use crate::security;
use crate::tasks::{self, TaskStore};

/// Transient per-run profile, used for display text only
pub struct SessionProfile {
    pub name: String,
    pub age: i64,
}

/// Run one full session from onboarding to exit.
///
/// End of input (Ctrl-D, exhausted script) ends the session cleanly; the
/// record keeps whatever the last successful save wrote.
pub async fn run_session(
    io: &mut dyn LineIo,
    store: &TaskStore,
    gateway: &dyn AssistantGateway,
) -> Result<()> {
    match drive(io, store, gateway).await {
        Ok(()) => Ok(()),
        Err(InputError::Closed) => {
            debug!("Input stream closed, ending session");
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

async fn drive(
    io: &mut dyn LineIo,
    store: &TaskStore,
    gateway: &dyn AssistantGateway,
) -> Result<(), InputError> {
    let profile = onboard(io)?;
    let mut tasks = store.load();
    debug!("Session started with {} saved tasks", tasks.len());

    loop {
        io.write_line(messages::MAIN_MENU);
        let choice = input::ask_text(io, messages::CHOOSE, None)?;

        match choice.as_str() {
            "1" => handle_mood(io)?,
            "2" => io.write_line(messages::ADVICE),
            "3" => handle_sum(io)?,
            "4" => tasks::run_task_menu(io, store, &mut tasks)?,
            "5" => {
                io.write_line(&messages::farewell(&profile.name));
                return Ok(());
            }
            "6" => handle_question(io, gateway).await?,
            _ => io.write_line(messages::UNRECOGNIZED_MAIN),
        }
    }
}

/// Runs once per session: greeting, name (with default), bounded age.
fn onboard(io: &mut dyn LineIo) -> Result<SessionProfile, InputError> {
    io.write_line(messages::GREETING);

    let name = input::ask_text(io, messages::ASK_NAME, Some(messages::DEFAULT_NAME))?;
    io.write_line(&messages::nice_to_meet(&name));

    let age = input::ask_int(io, messages::ASK_AGE, Some(0), Some(120))?;
    io.write_line(if age < 18 { messages::MINOR } else { messages::ADULT });

    Ok(SessionProfile { name, age })
}

fn handle_mood(io: &mut dyn LineIo) -> Result<(), InputError> {
    let mood = input::ask_int(io, messages::ASK_MOOD, Some(1), Some(10))?;
    io.write_line(&messages::mood_ack(mood));
    Ok(())
}

fn handle_sum(io: &mut dyn LineIo) -> Result<(), InputError> {
    let a = input::ask_int(io, messages::ASK_FIRST_NUMBER, None, None)?;
    let b = input::ask_int(io, messages::ASK_SECOND_NUMBER, None, None)?;
    io.write_line(&messages::sum_line(a, b));
    Ok(())
}

async fn handle_question(
    io: &mut dyn LineIo,
    gateway: &dyn AssistantGateway,
) -> Result<(), InputError> {
    let question = input::ask_text(io, messages::ASK_QUESTION, None)?;
    if question.is_empty() {
        io.write_line(messages::EMPTY_QUESTION);
        return Ok(());
    }

    match gateway.ask(&question).await {
        Ok(answer) => io.write_line(&answer),
        Err(AiError::MissingCredential) => {
            io.write_line(&messages::missing_credential(security::API_KEY_ENV));
        }
        Err(AiError::CallFailed(detail)) => {
            warn!("Assistant call failed: {}", detail);
            io.write_line(messages::ASSISTANT_FAILED);
        }
    }
    Ok(())
}
