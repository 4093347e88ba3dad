//!
//! The external executable invocation template.
//!

pub mod wiring;

use self::wiring::Wiring;

///
/// The external executable invocation template.
///
/// Holds the executable with its fixed flags and the way the input and output files
/// are passed to it. Concrete paths are only supplied when the execution is run.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Execution {
    /// The executable path followed by its fixed arguments.
    arguments: Vec<String>,
    /// The input file wiring.
    input: Wiring,
    /// The output file wiring.
    output: Wiring,
}

impl Execution {
    ///
    /// A shortcut constructor.
    ///
    /// # Errors
    ///
    /// 1. The argument template is empty or starts with an empty executable path.
    /// 2. Any of the wirings is flagged with an empty flag.
    ///
    pub fn new(arguments: Vec<String>, input: Wiring, output: Wiring) -> anyhow::Result<Self> {
        match arguments.first() {
            None => anyhow::bail!("The execution argument template is empty"),
            Some(executable) if executable.is_empty() => {
                anyhow::bail!("The execution executable path is empty")
            }
            Some(_) => {}
        }
        for (direction, wiring) in [("input", &input), ("output", &output)] {
            if let Wiring::Flagged(flag) = wiring {
                if flag.is_empty() {
                    anyhow::bail!("The execution {direction} flag is empty");
                }
            }
        }

        Ok(Self {
            arguments,
            input,
            output,
        })
    }

    ///
    /// Returns a copy of the execution launched through `launcher`.
    ///
    /// The launcher arguments are prepended, while the wirings stay the same.
    ///
    pub fn wrapped(&self, launcher: Vec<String>) -> Self {
        if launcher.is_empty() {
            return self.clone();
        }

        let mut arguments = launcher;
        arguments.extend(self.arguments.iter().cloned());
        Self {
            arguments,
            input: self.input.clone(),
            output: self.output.clone(),
        }
    }

    ///
    /// Returns the executable path.
    ///
    pub fn executable(&self) -> &str {
        self.arguments[0].as_str()
    }

    ///
    /// Returns the fixed arguments following the executable path.
    ///
    pub fn flags(&self) -> &[String] {
        &self.arguments[1..]
    }

    ///
    /// Returns the whole argument template.
    ///
    pub fn arguments(&self) -> &[String] {
        self.arguments.as_slice()
    }

    ///
    /// Returns the input wiring.
    ///
    pub fn input(&self) -> &Wiring {
        &self.input
    }

    ///
    /// Returns the output wiring.
    ///
    pub fn output(&self) -> &Wiring {
        &self.output
    }
}

impl std::fmt::Display for Execution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} (input {}, output {})",
            self.arguments.join(" "),
            self.input,
            self.output
        )
    }
}
