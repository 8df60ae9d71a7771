//! Decoded protocol lines.

/// Keyword flags a line can carry. Values abut their tag when rendered
/// (`[from]Rage`, `[of]p1a: Koratta`); bare flags render as the tag alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KwArgs {
    pub from: Option<String>,
    pub of: Option<String>,
    pub silent: bool,
    pub msg: bool,
    pub weak: bool,
    pub damage: bool,
    pub ohko: bool,
    pub miss: bool,
    pub still: bool,
}

impl KwArgs {
    pub fn is_empty(&self) -> bool {
        *self == KwArgs::default()
    }
}

/// One decoded unit of the line-oriented protocol: the tag and positional
/// arguments, plus keyword flags. Immutable once emitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Line {
    /// Positional arguments; `args[0]` is the tag.
    pub args: Vec<String>,
    pub kwargs: KwArgs,
}

impl Line {
    pub(crate) fn new<const N: usize>(args: [&str; N]) -> Self {
        Line { args: args.iter().map(|a| a.to_string()).collect(), kwargs: KwArgs::default() }
    }

    pub fn tag(&self) -> &str {
        self.args.first().map(String::as_str).unwrap_or("")
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for arg in &self.args {
            write!(f, "|{arg}")?;
        }
        if let Some(from) = &self.kwargs.from {
            write!(f, "|[from]{from}")?;
        }
        if let Some(of) = &self.kwargs.of {
            write!(f, "|[of]{of}")?;
        }
        for (flag, on) in [
            ("silent", self.kwargs.silent),
            ("msg", self.kwargs.msg),
            ("weak", self.kwargs.weak),
            ("damage", self.kwargs.damage),
            ("ohko", self.kwargs.ohko),
            ("miss", self.kwargs.miss),
            ("still", self.kwargs.still),
        ] {
            if on {
                write!(f, "|[{flag}]")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_plain_line() {
        let line = Line::new(["faint", "p2a: Rakkii"]);
        assert_eq!(line.to_string(), "|faint|p2a: Rakkii");
        assert_eq!(line.tag(), "faint");
    }

    #[test]
    fn test_render_kwargs_in_order() {
        let mut line = Line::new(["-boost", "p1a: Hitokage", "atk", "1"]);
        line.kwargs.from = Some("Rage".into());
        assert_eq!(line.to_string(), "|-boost|p1a: Hitokage|atk|1|[from]Rage");

        let mut line = Line::new(["move", "p2a: Nasshii", "Skull Bash", ""]);
        line.kwargs.still = true;
        assert_eq!(line.to_string(), "|move|p2a: Nasshii|Skull Bash||[still]");
    }
}
