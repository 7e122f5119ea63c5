//! Interactive REPL (Read-Eval-Print Loop) for layerkv.

use std::borrow::Cow;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

use tracing::{debug, warn};

use super::error::{ShellError, ShellResult};
use crate::executor::{CommandOutput, CommandProcessor};

const BANNER: [&str; 3] = [
    "An interactive transactional key-value store.",
    "Enter h (help) for a list of commands",
    "Ctrl-c to exit",
];

const HELP: [&str; 7] = [
    "SET <key> <value> - store the value for key",
    "GET <key>         - return the current value for key",
    "DELETE <key>      - remove the entry for key",
    "COUNT <value>     - return the number of keys that have the given value",
    "BEGIN             - start a new transaction",
    "COMMIT            - complete the current transaction",
    "ROLLBACK          - revert to state prior to BEGIN call",
];

/// REPL configuration.
#[derive(Debug, Clone)]
pub struct ReplConfig {
    /// Prompt string, printed before each line is read.
    pub prompt: String,
    /// Print the startup banner.
    pub banner: bool,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            prompt: String::new(),
            banner: true,
        }
    }
}

impl ReplConfig {
    /// Set the prompt.
    pub fn prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Set the banner flag.
    pub fn banner(mut self, value: bool) -> Self {
        self.banner = value;
        self
    }
}

/// The interactive REPL.
pub struct Repl {
    processor: CommandProcessor,
    config: ReplConfig,
}

impl Repl {
    /// Create a new REPL with the given processor.
    pub fn new(processor: CommandProcessor) -> Self {
        Self {
            processor,
            config: ReplConfig::default(),
        }
    }

    /// Create a REPL with custom configuration.
    pub fn with_config(processor: CommandProcessor, config: ReplConfig) -> Self {
        Self { processor, config }
    }

    /// Get a reference to the command processor.
    pub fn processor(&self) -> &CommandProcessor {
        &self.processor
    }

    /// Run the REPL on stdin and stdout.
    pub fn run(&mut self) -> ShellResult<()> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.run_with(stdin.lock(), stdout.lock())
    }

    /// Replay a script of commands, writing results to stdout.
    pub fn run_file(&mut self, path: impl AsRef<Path>) -> ShellResult<()> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| {
            warn!(path = %path.display(), error = %source, "cannot open script");
            ShellError::Script {
                path: path.to_path_buf(),
                source,
            }
        })?;
        debug!(path = %path.display(), "replaying script");
        self.run_with(BufReader::new(file), io::stdout().lock())
    }

    /// Run the loop over any line source until end of input.
    pub fn run_with<R: BufRead, W: Write>(&mut self, mut reader: R, mut out: W) -> ShellResult<()> {
        if self.config.banner {
            for line in BANNER {
                writeln!(out, "{}", line)?;
            }
        }

        let mut buf = Vec::new();
        loop {
            if !self.config.prompt.is_empty() {
                write!(out, "{}", self.config.prompt)?;
                out.flush()?;
            }

            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                debug!("end of input");
                break;
            }

            let line = String::from_utf8_lossy(&buf);
            if let Cow::Owned(_) = line {
                warn!(bytes = buf.len(), "line is not valid UTF-8, decoding lossily");
            }
            self.execute(&line, &mut out)?;
        }

        out.flush()?;
        Ok(())
    }

    /// Process one line and render its result.
    pub fn execute<W: Write>(&mut self, line: &str, out: &mut W) -> ShellResult<()> {
        match self.processor.process_line(line) {
            Ok(CommandOutput::Silent) => {}
            Ok(CommandOutput::Value(value)) => writeln!(out, "=> {}", value)?,
            Ok(CommandOutput::Help) => self.print_help(out)?,
            Err(e) => writeln!(out, "=> {}", e)?,
        }
        Ok(())
    }

    fn print_help<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for line in HELP {
            writeln!(out, "{}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn session(config: ReplConfig, input: &str) -> (Repl, String) {
        let mut repl = Repl::with_config(CommandProcessor::new(), config);
        let mut out = Vec::new();
        repl.run_with(Cursor::new(input), &mut out).unwrap();
        (repl, String::from_utf8(out).unwrap())
    }

    fn quiet(input: &str) -> String {
        session(ReplConfig::default().banner(false), input).1
    }

    #[test]
    fn test_banner() {
        let (_, out) = session(ReplConfig::default(), "");
        assert_eq!(
            out,
            "An interactive transactional key-value store.\n\
             Enter h (help) for a list of commands\n\
             Ctrl-c to exit\n"
        );
    }

    #[test]
    fn test_silent_commands() {
        assert_eq!(quiet("SET a 1\nBEGIN\nSET b 2\nCOMMIT\nfoo\n\n"), "");
    }

    #[test]
    fn test_get_renders_value() {
        assert_eq!(quiet("SET a 1\nGET a\nGET missing\n"), "=> 1\n=> \n");
    }

    #[test]
    fn test_errors_render_and_continue() {
        let out = quiet("SET onlykey\nCOMMIT\nROLLBACK\nDELETE nope\nGET\nCOUNT\nSET a 1\nGET a\n");
        assert_eq!(
            out,
            "=> Too few arguments - SET <key> <value>\n\
             => no transaction\n\
             => no transaction\n\
             => key not set\n\
             => Too few arguments - GET <key>\n\
             => Too few arguments - COUNT <value>\n\
             => 1\n"
        );
    }

    #[test]
    fn test_help_block() {
        let out = quiet("h\n");
        assert_eq!(out.lines().count(), 7);
        assert!(out.starts_with("SET <key> <value> - store the value for key\n"));
        assert!(out.ends_with("ROLLBACK          - revert to state prior to BEGIN call\n"));
        assert!(!out.contains("=>"));
    }

    #[test]
    fn test_transaction_session() {
        let input = "SET a 10\n\
                     BEGIN\n\
                     SET a 20\n\
                     GET a\n\
                     BEGIN\n\
                     DELETE a\n\
                     GET a\n\
                     ROLLBACK\n\
                     GET a\n\
                     COMMIT\n\
                     GET a\n\
                     COUNT 20\n";
        assert_eq!(quiet(input), "=> 20\n=> \n=> 20\n=> 20\n=> 1\n");
    }

    #[test]
    fn test_missing_trailing_newline() {
        assert_eq!(quiet("SET a 1\nGET a"), "=> 1\n");
    }

    #[test]
    fn test_invalid_utf8_line_does_not_end_session() {
        let mut repl = Repl::with_config(CommandProcessor::new(), ReplConfig::default().banner(false));
        let mut out = Vec::new();
        repl.run_with(Cursor::new(&b"SET a 1\nSET b \xff\xfe\nGET a\nGET b\n"[..]), &mut out)
            .unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "=> 1\n=> \u{FFFD}\u{FFFD}\n");
        assert_eq!(repl.processor().stack().current().len(), 2);
    }

    #[test]
    fn test_long_line() {
        let value = "x".repeat(1 << 20);
        let out = quiet(&format!("SET big {value}\nCOUNT {value}\n"));
        assert_eq!(out, "=> 1\n");
    }

    #[test]
    fn test_crlf_input() {
        assert_eq!(quiet("SET a 1\r\nGET a\r\n"), "=> 1\n");
    }

    #[test]
    fn test_prompt() {
        let (_, out) = session(ReplConfig::default().banner(false).prompt("> "), "GET a\n");
        assert_eq!(out, "> => \n> ");
    }

    #[test]
    fn test_state_survives_session() {
        let (repl, _) = session(ReplConfig::default(), "SET a 1\nBEGIN\nSET b 2\n");
        let stack = repl.processor().stack();
        assert_eq!(stack.depth(), 1);
        assert_eq!(stack.base().get("a"), Some("1"));
        assert_eq!(stack.base().get("b"), None);
    }

    #[test]
    fn test_run_file() {
        let mut script = tempfile::NamedTempFile::new().unwrap();
        writeln!(script, "SET a 1").unwrap();
        writeln!(script, "BEGIN").unwrap();
        writeln!(script, "DELETE a").unwrap();
        writeln!(script, "COMMIT").unwrap();
        script.flush().unwrap();

        let mut repl = Repl::with_config(CommandProcessor::new(), ReplConfig::default().banner(false));
        repl.run_file(script.path()).unwrap();
        assert!(repl.processor().stack().current().is_empty());
    }

    #[test]
    fn test_run_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let mut repl = Repl::new(CommandProcessor::new());
        let err = repl.run_file(dir.path().join("absent.txt")).unwrap_err();
        assert!(matches!(err, ShellError::Script { .. }));
        assert!(err.to_string().contains("absent.txt"));
    }
}
