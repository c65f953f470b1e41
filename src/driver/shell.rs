//! Interactive Shell Parsing
//!
//! 対話シェルの1行をコマンドに変換する

use super::cli::Command;

pub const SHELL_HELP: &str = "\
commands:
  register <id> <name>   register a new user
  get <id>               show a user
  update <id> [name]     rename a user
  delete <id>            delete a user
  help                   show this message
  exit | quit            leave the shell";

/// 対話シェルの入力
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellInput {
    Run(Command),
    Help,
    Exit,
}

/// 1行をパースする
///
/// ユーザー名は行末までを1つの引数として扱うため、空白を含む名前も受け付ける
///
/// # Errors
///
/// 未知のコマンド、または引数の数が合わない場合に使い方のメッセージを返す
pub fn parse_line(line: &str) -> Result<ShellInput, String> {
    let (command, rest) = split_first_word(line.trim());
    let (id, name) = split_first_word(rest);
    let name = (!name.is_empty()).then(|| name.to_string());

    let input = match (command, id.is_empty(), name) {
        ("register", false, Some(name)) => ShellInput::Run(Command::Register {
            id: id.to_string(),
            name,
            mail_address: None,
        }),
        ("register", ..) => return Err("usage: register <id> <name>".to_string()),
        ("get", false, None) => ShellInput::Run(Command::Get { id: id.to_string() }),
        ("get", ..) => return Err("usage: get <id>".to_string()),
        ("update", false, name) => ShellInput::Run(Command::Update {
            id: id.to_string(),
            name,
        }),
        ("update", ..) => return Err("usage: update <id> [name]".to_string()),
        ("delete", false, None) => ShellInput::Run(Command::Delete { id: id.to_string() }),
        ("delete", ..) => return Err("usage: delete <id>".to_string()),
        ("help", true, None) => ShellInput::Help,
        ("exit" | "quit", true, None) => ShellInput::Exit,
        ("", ..) => return Err("empty command".to_string()),
        (command, ..) => {
            return Err(format!(
                "unknown or malformed command: {} (type 'help' for usage)",
                command
            ))
        }
    };

    Ok(input)
}

/// 先頭の単語と、残りを前後の空白を除いて返す
fn split_first_word(text: &str) -> (&str, &str) {
    match text.split_once(char::is_whitespace) {
        Some((first, rest)) => (first, rest.trim()),
        None => (text, ""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_register() {
        assert_eq!(
            parse_line("register u1 Alice"),
            Ok(ShellInput::Run(Command::Register {
                id: "u1".to_string(),
                name: "Alice".to_string(),
                mail_address: None,
            }))
        );
    }

    #[test]
    fn test_parse_update_with_and_without_name() {
        assert_eq!(
            parse_line("update u1"),
            Ok(ShellInput::Run(Command::Update {
                id: "u1".to_string(),
                name: None,
            }))
        );
        assert_eq!(
            parse_line("  update   u1   Bob  "),
            Ok(ShellInput::Run(Command::Update {
                id: "u1".to_string(),
                name: Some("Bob".to_string()),
            }))
        );
    }

    #[test]
    fn test_parse_exit_aliases() {
        assert_eq!(parse_line("exit"), Ok(ShellInput::Exit));
        assert_eq!(parse_line("quit"), Ok(ShellInput::Exit));
        assert_eq!(parse_line("help"), Ok(ShellInput::Help));
    }

    #[test]
    fn test_parse_register_name_with_spaces() {
        assert_eq!(
            parse_line("register u1 山田 太郎"),
            Ok(ShellInput::Run(Command::Register {
                id: "u1".to_string(),
                name: "山田 太郎".to_string(),
                mail_address: None,
            }))
        );
        assert_eq!(
            parse_line("update u1 Mary  Ann "),
            Ok(ShellInput::Run(Command::Update {
                id: "u1".to_string(),
                name: Some("Mary  Ann".to_string()),
            }))
        );
    }

    #[test]
    fn test_parse_wrong_arity() {
        assert_eq!(
            parse_line("register u1"),
            Err("usage: register <id> <name>".to_string())
        );
        assert_eq!(parse_line("get"), Err("usage: get <id>".to_string()));
        assert_eq!(
            parse_line("delete u1 u2"),
            Err("usage: delete <id>".to_string())
        );
        assert!(parse_line("exit now").is_err());
    }

    #[test]
    fn test_parse_unknown_command() {
        assert!(parse_line("shipping hoge").is_err());
        assert!(parse_line("").is_err());
    }
}
