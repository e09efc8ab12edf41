// SPDX-License-Identifier: PMPL-1.0-or-later

//! Fatal startup notification.
//!
//! The desktop build shows a modal dialog before exiting; the console build
//! prints to stderr. Either way the process ends.

use std::process;

pub trait FatalNotifier {
    fn notify(&self, message: &str);
}

/// Writes the message to stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleNotifier;

impl FatalNotifier for ConsoleNotifier {
    fn notify(&self, message: &str) {
        eprintln!("Error: {}", message);
    }
}

/// Notify the user, then terminate the process.
pub fn fatal_shutdown(notifier: &dyn FatalNotifier, message: &str) -> ! {
    notifier.notify(message);
    process::exit(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Recorder {
        messages: RefCell<Vec<String>>,
    }

    impl FatalNotifier for Recorder {
        fn notify(&self, message: &str) {
            self.messages.borrow_mut().push(message.to_string());
        }
    }

    #[test]
    fn notifier_receives_message() {
        let recorder = Recorder::default();
        let notifier: &dyn FatalNotifier = &recorder;
        notifier.notify("missing baseline `en` language file");
        assert_eq!(
            recorder.messages.borrow().as_slice(),
            ["missing baseline `en` language file"]
        );
    }
}
