//! Shell completion generation.

use std::io;

use clap::Command;
use clap_complete::{generate, Shell};

/// Generate shell completion script.
pub fn generate_completion(cmd: &mut Command, shell: Shell, out: &mut dyn io::Write) {
    generate(shell, cmd, "tagcalc", out);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_bash_completion() {
        let mut cmd = Command::new("tagcalc").arg(clap::Arg::new("formula").long("formula"));
        let mut buf = Vec::new();
        generate_completion(&mut cmd, Shell::Bash, &mut buf);
        let script = String::from_utf8(buf).unwrap();
        assert!(script.contains("tagcalc"));
        assert!(script.contains("--formula"));
    }

    #[test]
    fn generate_fish_completion() {
        let mut cmd = Command::new("tagcalc");
        let mut buf = Vec::new();
        generate_completion(&mut cmd, Shell::Fish, &mut buf);
        assert!(!buf.is_empty());
    }
}
