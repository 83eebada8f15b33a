//! Command-line argument parsing.
use cashback_votes_engine::parse_direction;
use cashback_votes_shared::types::VoteDirection;
use uuid::Uuid;

use crate::errors::AppError;

pub const USAGE: &str = "usage: cashback-votes entry <entry-id> <up|down>\n       \
                         cashback-votes suggestion <entry-id> <suggestion-id> <up|down>";

/// What the vote is cast on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Entry(Uuid),
    /// Suggestions are listed per entry, so the parent entry is needed to load one.
    Suggestion { entry_id: Uuid, suggestion_id: Uuid },
}

/// A single vote requested on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VoteCommand {
    pub target: Target,
    pub direction: VoteDirection,
}

impl VoteCommand {
    /// Parses the arguments that follow the program name.
    pub fn parse<I>(args: I) -> Result<Self, AppError>
    where
        I: IntoIterator<Item = String>,
    {
        let args: Vec<String> = args.into_iter().collect();
        let args: Vec<&str> = args.iter().map(String::as_str).collect();

        match args.as_slice() {
            ["entry", entry_id, direction] => Ok(Self {
                target: Target::Entry(parse_id(entry_id)?),
                direction: parse_direction(direction)?,
            }),
            ["suggestion", entry_id, suggestion_id, direction] => Ok(Self {
                target: Target::Suggestion {
                    entry_id: parse_id(entry_id)?,
                    suggestion_id: parse_id(suggestion_id)?,
                },
                direction: parse_direction(direction)?,
            }),
            _ => Err(AppError::usage(USAGE)),
        }
    }
}

fn parse_id(value: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(value).map_err(|e| AppError::usage(format!("invalid id {}: {}", value, e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use cashback_votes_engine::VoteError;

    const ENTRY: &str = "a7ef0016-a2f4-44fb-82ca-a4f5c61d2cf5";
    const SUGGESTION: &str = "e50fe85c-108a-4d4a-97b9-376a1e5d318b";

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_parse_entry_vote() {
        let command = VoteCommand::parse(args(&["entry", ENTRY, "up"])).unwrap();
        assert_eq!(command.target, Target::Entry(Uuid::parse_str(ENTRY).unwrap()));
        assert_eq!(command.direction, VoteDirection::Up);
    }

    #[test]
    fn test_parse_suggestion_vote() {
        let command = VoteCommand::parse(args(&["suggestion", ENTRY, SUGGESTION, "down"])).unwrap();
        assert_eq!(
            command.target,
            Target::Suggestion {
                entry_id: Uuid::parse_str(ENTRY).unwrap(),
                suggestion_id: Uuid::parse_str(SUGGESTION).unwrap(),
            }
        );
        assert_eq!(command.direction, VoteDirection::Down);
    }

    #[test]
    fn test_remove_is_an_invalid_direction() {
        let result = VoteCommand::parse(args(&["entry", ENTRY, "remove"]));
        assert!(matches!(
            result,
            Err(AppError::Vote(VoteError::InvalidDirection(_)))
        ));
    }

    #[test]
    fn test_bad_id_and_arity() {
        assert!(matches!(
            VoteCommand::parse(args(&["entry", "not-a-uuid", "up"])),
            Err(AppError::Usage(_))
        ));
        assert!(matches!(
            VoteCommand::parse(args(&["entry", ENTRY])),
            Err(AppError::Usage(_))
        ));
        assert!(matches!(VoteCommand::parse(args(&[])), Err(AppError::Usage(_))));
    }
}
