//! Machine trait for the capture and results screens.
//!
//! Machines are pure state machines that interpret events and decide on commands.
//! State lives inside the machine, and the `decide` method is synchronous (no IO,
//! no timers). Whoever owns the machine executes the returned command: the tokio
//! sessions in [`crate::session`], or a UI component.

/// A state machine that interprets events and decides on commands.
///
/// # Guarantees
///
/// - Called synchronously (no async)
/// - Called serially by its owner
/// - At most one command per event
pub trait Machine {
    /// The event type this machine handles.
    type Event;

    /// The command type this machine can emit.
    type Command;

    /// Process an event and optionally return a command.
    fn decide(&mut self, event: Self::Event) -> Option<Self::Command>;
}
