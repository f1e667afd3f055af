//! Behaviour of the statement scanner on whole documents.

use rstest::rstest;
use unlog::unlog::counting::count_occurrences;
use unlog::unlog::scanning::{collapse_blank_lines, EscapeMode, UnterminatedPolicy};
use unlog::{clean, clean_with, ScanOptions};

#[rstest]
#[case::plain("console.log(1);")]
#[case::no_semicolon("console.log(value)")]
#[case::indented("    console.log(a, b, c);")]
#[case::paren_in_double_quotes(r#"console.log("value)");"#)]
#[case::paren_in_single_quotes("console.log('((', x);")]
#[case::nested_calls("console.log(fmt(a(b(c))));")]
#[case::template_slot_with_call("console.log(`sum=${add(1,2)}`);")]
#[case::template_text_paren("console.log(`a ) b`);")]
#[case::nested_slots("console.log(`${a ? `${f(x)}` : g()}`);")]
#[case::escaped_quote(r#"console.log("say \"hi\" :)");"#)]
#[case::escaped_backtick(r"console.log(`a \` ) b`);")]
fn single_line_statement_is_removed(#[case] statement: &str) {
    let input = format!("before();\n{}\nafter();", statement);
    assert_eq!(clean(&input), "before();\nafter();");
}

#[rstest]
#[case::assigned("const x = console.log(1);")]
#[case::argument("foo(console.log(1));")]
#[case::chained("logger && console.log(1);")]
#[case::space_before_paren("console.log (1);")]
#[case::other_method("console.error(1);")]
#[case::commented("// console.log(1);")]
#[case::in_string("const s = \"console.log(1)\";")]
fn non_statement_call_is_kept(#[case] line: &str) {
    let input = format!("a();\n{}\nb();", line);
    assert_eq!(clean(&input), input);
}

#[rstest]
#[case::single_line("\u{feff}console.log(1);\nkeep();")]
#[case::multi_line("\u{feff}console.log(\n  1\n);\nkeep();")]
fn statement_after_byte_order_mark_is_removed(#[case] input: &str) {
    assert_eq!(clean(input), "keep();");
}

#[test]
fn multi_line_statement_is_one_span() {
    let input = "start();\nconsole.log(\n  \"a\",\n  b\n);\nend();";
    let outcome = clean_with(input, &ScanOptions::default());
    assert_eq!(outcome.text, "start();\nend();");
    assert_eq!(outcome.removed_count(), 1);
    assert_eq!(outcome.removed[0].start, 1);
    assert_eq!(outcome.removed[0].end, 4);
    assert_eq!(outcome.removed[0].line_count(), 4);
}

#[test]
fn string_spanning_lines_keeps_statement_open() {
    let input = "console.log(`line one )\nline two`);\nkept();";
    assert_eq!(clean(input), "kept();");
}

#[test]
fn code_sharing_the_line_goes_with_the_statement() {
    assert_eq!(clean("console.log(a); run();\nkept();"), "kept();");
}

#[test]
fn text_without_candidates_only_collapses_blank_lines() {
    let input = "let a = 1;\n\n\n\nlet b = \"console.log(\";\n\nlet c;";
    assert_eq!(clean(input), collapse_blank_lines(input));
    assert_eq!(clean(input), "let a = 1;\n\nlet b = \"console.log(\";\n\nlet c;");
}

#[test]
fn blank_line_runs_collapse_to_one() {
    assert_eq!(clean("a\n\n\n\nb"), "a\n\nb");
    assert_eq!(clean("a\n\n\nb"), "a\n\nb");
    assert_eq!(clean("a\n\nb"), "a\n\nb");
}

#[test]
fn escaped_backslash_before_quote_depends_on_escape_mode() {
    // The closing quote of "a\\" is real; the single-level check reads it as escaped,
    // the string never closes and the statement swallows the rest of the file.
    let input = "console.log(\"a\\\\\");\nkept();\nalso_kept();";

    let single = clean_with(input, &ScanOptions::default());
    assert_eq!(single.text, "");
    assert_eq!(single.unterminated_count(), 1);

    let counted = clean_with(
        input,
        &ScanOptions {
            escape_mode: EscapeMode::Counted,
            ..ScanOptions::default()
        },
    );
    assert_eq!(counted.text, "kept();\nalso_kept();");
    assert_eq!(counted.unterminated_count(), 0);
}

#[test]
fn unterminated_statement_policy() {
    let input = "kept();\nconsole.log(\"never closed\"\nmore();";

    assert_eq!(clean(input), "kept();");

    let keep = ScanOptions {
        unterminated: UnterminatedPolicy::Keep,
        ..ScanOptions::default()
    };
    assert_eq!(clean_with(input, &keep).text, input);

    let later = "console.log(\nfoo();\nconsole.log(1);\nbar();";
    let outcome = clean_with(later, &keep);
    assert_eq!(outcome.text, "console.log(\nfoo();\nbar();");
    assert_eq!(outcome.removed_count(), 1);
    assert_eq!(outcome.unterminated_count(), 1);
}

#[test]
fn pattern_count_and_scanner_count_can_differ() {
    let input = "console.log(1);\nconst x = console.log(2);\nconsole.log (3);";
    let outcome = clean_with(input, &ScanOptions::default());

    assert_eq!(count_occurrences(input), 3);
    assert_eq!(outcome.removed_count(), 1);
    assert_eq!(count_occurrences(&outcome.text), 2);
}

#[test]
fn cleans_a_realistic_module() {
    let input = r#"import { sum } from "./math";

console.log("starting up");

export function total(items) {
  console.log(
    "items:",
    items.map((item) => item.price),
  );
  const result = sum(items);
  console.log(`total=${format(result, "usd")}`);
  return result;
}


const banner = "console.log(not a call)";
const logger = console.log("kept, not a statement");"#;

    let outcome = clean_with(input, &ScanOptions::default());
    assert_eq!(outcome.removed_count(), 3);

    insta::assert_snapshot!(outcome.text, @r#"
import { sum } from "./math";

export function total(items) {
  const result = sum(items);
  return result;
}

const banner = "console.log(not a call)";
const logger = console.log("kept, not a statement");
"#);
}
