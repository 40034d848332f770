//! Front end behaviour through the public API.

use lumen_lib::module::ModuleType;
use lumen_lib::parse::{LexError, Located, Location, ParseError, TokenKind, lex, parse_module};

use super::common::{CORE, GAME};

mod tokens {
  use super::*;

  /// module + name + `{` + 3 per scalar property + `}` + end of file, with
  /// arrays adding their brackets, elements and commas.
  #[test]
  fn token_count_matches_grammar() {
    let source = r#"
      // comment
      module Core {
        type = static_library
        sources = ["a.cpp", "b.cpp"] /* two */
        deps = [Math]
      }
    "#;

    let tokens = lex(source).unwrap();
    let scalar = 3;
    let sources = 2 + 2 + 3;
    let deps = 2 + 3;
    assert_eq!(tokens.len(), 3 + scalar + sources + deps + 1 + 1);
    assert_eq!(tokens.last().unwrap().kind, TokenKind::EndOfFile);
  }

  #[test]
  fn comments_produce_no_tokens() {
    let with = lex("module /* x */ A // y\n { }").unwrap();
    let without = lex("module A { }").unwrap();
    let kinds = |tokens: &[lumen_lib::parse::Token<'_>]| tokens.iter().map(|t| t.kind).collect::<Vec<_>>();
    assert_eq!(kinds(&with), kinds(&without));
  }
}

mod modules {
  use super::*;

  #[test]
  fn fully_specified_module() {
    let core = parse_module("Core", "Engine/Core", CORE).unwrap();

    assert_eq!(core.module_type, ModuleType::StaticLibrary);
    assert_eq!(core.sources, vec!["Source/Core.cpp", "Source/Memory.cpp"]);
    assert_eq!(core.public_includes, vec!["Include"]);
    assert_eq!(core.private_includes, vec!["Private"]);
    assert_eq!(core.defines, vec!["CORE_EXPORTS=1"]);
    assert!(core.dependencies.is_empty());
  }

  #[test]
  fn executable_with_dependencies() {
    let game = parse_module("Game", "Game", GAME).unwrap();
    assert_eq!(game.module_type, ModuleType::Executable);
    assert_eq!(game.dependencies, vec!["Renderer", "Audio"]);
  }

  #[test]
  fn quoting_is_insignificant_for_dependencies() {
    let bare = parse_module("M", ".", "module M { deps = [A, B] }").unwrap();
    let quoted = parse_module("M", ".", r#"module M { deps = ["A", "B"] }"#).unwrap();
    assert_eq!(bare.dependencies, quoted.dependencies);
  }

  #[test]
  fn default_type() {
    let module = parse_module("M", ".", r#"module M { sources = ["m.cpp"] }"#).unwrap();
    assert_eq!(module.module_type, ModuleType::StaticLibrary);
  }

  #[test]
  fn unknown_key_is_ignored() {
    let module = parse_module("M", ".", r#"module M { foo = "bar" deps = [A] }"#).unwrap();
    let plain = parse_module("M", ".", "module M { deps = [A] }").unwrap();
    assert_eq!(module, plain);
  }
}

mod failures {
  use super::*;

  #[test]
  fn unterminated_string_points_at_opening_quote() {
    let err = parse_module("M", ".", r#"module M { sources = ["a.cpp }"#).unwrap_err();
    assert_eq!(
      err,
      ParseError::Lex(LexError::UnterminatedString {
        location: Location::new(1, 23)
      })
    );
  }

  #[test]
  fn syntax_error_on_later_line() {
    let err = parse_module("M", ".", "module M {\n  type = executable\n  deps = [A,, B]\n}").unwrap_err();
    assert!(matches!(err, ParseError::Syntax(_)));
    assert_eq!(err.to_string(), "expected array element, got ','");
    assert_eq!(err.location(), Location::new(3, 13));
  }

  #[test]
  fn empty_source() {
    let err = parse_module("M", ".", "").unwrap_err();
    assert_eq!(err.to_string(), "expected 'module', got end of file");
    assert_eq!(err.location(), Location::new(1, 1));
  }
}
