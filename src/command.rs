/// Composes the command line for one tool: `<invocation> <options> <target>`
/// joined with single spaces, separator-normalized for the host platform.
pub fn build(invocation: &str, options: &str, target: &str) -> String {
    compose(invocation, options, target, cfg!(windows))
}

/// Platform-independent core of [`build`], with the backslash rewrite
/// controlled by an explicit flag so both behaviors are testable anywhere.
///
/// The rewrite replaces every `/` in the *entire* string, invocation and
/// options included. A forward slash embedded in an option literal (say
/// `--exclude=build/gen`) is rewritten too; the original harness behaves
/// the same way and option strings with meaningful forward slashes on
/// Windows are not supported.
pub fn compose(
    invocation: &str,
    options: &str,
    target: &str,
    backslash_separators: bool,
) -> String {
    let command = format!("{} {} {}", invocation, options, target);
    if backslash_separators {
        command.replace('/', "\\")
    } else {
        command
    }
}
