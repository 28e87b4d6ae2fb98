use super::*;

#[test]
fn buffer_println_captures_with_newline() {
    let console = BufferConsole::new();
    console.println("hello");
    assert_eq!(console.get_output(), "hello\n");
}

#[test]
fn buffer_print_captures_without_newline() {
    let console = BufferConsole::new();
    console.print("Enter value for x: ");
    console.print("ok");
    assert_eq!(console.get_output(), "Enter value for x: ok");
}

#[test]
fn warnings_are_kept_apart_from_output() {
    let console = BufferConsole::new();
    console.println("out");
    console.warn("careful");
    assert_eq!(console.get_output(), "out\n");
    assert_eq!(console.get_warnings(), vec!["careful".to_string()]);

    console.clear();
    assert!(console.get_output().is_empty());
    assert!(console.get_warnings().is_empty());
}

#[test]
fn scripted_input_then_closed() {
    let console = scripted_console(["1", "two"]);
    assert_eq!(console.read_line().as_deref(), Some("1"));
    assert_eq!(console.read_line().as_deref(), Some("two"));
    assert_eq!(console.read_line(), None);
}

#[test]
fn silent_console_discards_everything() {
    let console = silent_console();
    console.println("gone");
    console.warn("gone too");
    assert_eq!(console.get_output(), "");
    assert!(console.get_warnings().is_empty());
    assert_eq!(console.read_line(), None);
}

#[test]
fn shared_handle_sees_the_same_buffer() {
    let console = buffer_console();
    let alias = SharedConsole::clone(&console);
    alias.print("x");
    assert_eq!(console.get_output(), "x");
}

#[test]
fn line_terminators_are_trimmed() {
    assert_eq!(trim_newline("abc\r\n".to_string()), "abc");
    assert_eq!(trim_newline("abc\n".to_string()), "abc");
    assert_eq!(trim_newline("abc".to_string()), "abc");
}
