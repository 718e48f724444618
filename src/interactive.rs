//! Interactive confirmation for the sync command

use dialoguer::console::Term;
use pubsync::sync::SyncPlan;

/// User's choice for a pending distribution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum UserChoice {
    /// Run the distribution
    Yes,
    /// Leave everything untouched
    No,
}

/// Single-decision prompter shown before a distribution runs
pub struct InteractivePrompter;

impl InteractivePrompter {
    /// Create a new interactive prompter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Ask whether the plan should be executed
    ///
    /// Returns false, skipping the distribution, when the user declines
    /// or the terminal cannot be read.
    pub fn confirm(&mut self, plan: &SyncPlan) -> bool {
        println!("\nAbout to distribute {}:", plan.version);
        println!("  dev   -> {}", plan.dev_target.display());
        println!("  pub   -> {}", plan.pub_target.display());
        println!("  alias -> {}", plan.alias_target.display());

        match Self::show_prompt() {
            Ok(choice) => choice == UserChoice::Yes,
            Err(e) => {
                eprintln!("Failed to read user input: {e}");
                false
            }
        }
    }

    /// Show the selection prompt
    fn show_prompt() -> std::io::Result<UserChoice> {
        let term = Term::stderr();

        print!("Proceed? [y/n]: ");
        std::io::Write::flush(&mut std::io::stdout())?;

        loop {
            let key = term.read_char()?;

            // Echo the character
            println!("{key}");

            match key {
                'y' | 'Y' => return Ok(UserChoice::Yes),
                'n' | 'N' | 'q' | 'Q' => return Ok(UserChoice::No),
                _ => {
                    print!("Please answer y or n: ");
                    std::io::Write::flush(&mut std::io::stdout())?;
                }
            }
        }
    }
}
