use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::{GameError, Rule};

use super::{RoundSummary, Table, TableEventHandler};

/// Cooperative cancellation signal. The process-lifecycle collaborator
/// keeps a clone and raises it to end the session; the session observes it
/// between rounds, so no in-flight bet is ever half-settled.
#[derive(Clone, Debug, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Repeats rounds at one table until the player runs out of chips,
/// declines to continue, or cancellation is requested.
pub struct Session {
    table: Table,
    cancel: CancelFlag,
}

impl Session {
    pub fn new(rule: &Rule) -> Session {
        Session {
            table: Table::new(rule),
            cancel: CancelFlag::default(),
        }
    }

    /// A clone of the cancellation flag, for the process-lifecycle side.
    pub fn cancel_flag(&self) -> CancelFlag {
        self.cancel.clone()
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    /// False exactly when the player has run out of chips.
    pub fn can_continue(&self) -> bool {
        self.table.player().chips() > 0
    }

    pub fn play_round<H: TableEventHandler>(
        &mut self,
        handler: &mut H,
    ) -> Result<RoundSummary, GameError> {
        self.table.play_round_with_handler(handler)
    }

    pub fn run<H: TableEventHandler>(&mut self, handler: &mut H) -> Result<(), GameError> {
        while !self.cancel.is_cancelled() {
            let summary = self.play_round(handler)?;
            if !self.can_continue() {
                handler.notify("You are out of chips.");
                break;
            }
            handler.notify(&format!("Remaining chips: {}", summary.chips));
            if self.cancel.is_cancelled() || !handler.request_continue() {
                break;
            }
        }
        Ok(())
    }
}
