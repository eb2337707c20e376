//! Rule-name derivation
//!
//! Ninja rule names come from a restricted alphabet, so commands are filtered
//! down to `[A-Za-z0-9_]` before being used as identifiers. The mapping is
//! deterministic but not injective; the compiler is responsible for catching
//! the resulting collisions (and the empty-name case).

/// Derive a rule name from a command string.
///
/// Keeps ASCII letters, digits and underscores in their original order and
/// drops every other character.
pub fn rule_name(command: &str) -> String {
    command
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_everything_outside_the_identifier_alphabet() {
        assert_eq!(rule_name("gcc -c a.c -o a.o"), "gcccaocaoaoo");
        assert_eq!(rule_name("./run.sh > out 2>&1"), "runshout21");
        assert_eq!(rule_name("echo \"hi there\""), "echohithere");
    }

    #[test]
    fn keeps_underscores() {
        assert_eq!(rule_name("my_tool --flag"), "my_toolflag");
    }

    #[test]
    fn fully_filtered_command_yields_empty_name() {
        assert_eq!(rule_name("!!! ???"), "");
        assert_eq!(rule_name(""), "");
    }

    #[test]
    fn output_stays_in_the_restricted_alphabet() {
        for input in [
            "gcc -c a.c -o a.o",
            "täst ünïcode",
            "a\tb\nc",
            "$(subshell) | pipe",
        ] {
            let name = rule_name(input);
            assert!(name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_'));
            // Deterministic: same input, same output
            assert_eq!(name, rule_name(input));
        }
    }

    #[test]
    fn distinct_commands_can_collide() {
        assert_eq!(rule_name("run!"), rule_name("run@"));
    }
}
