use std::fmt;
use std::str::FromStr;

use crate::errors::ParseError;

/// The five UI surfaces. Their ids are the stable names used in settings,
/// logs and hit-testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Surface {
    Intent,
    Run,
    Log,
    Pulse,
    Templates,
}

impl Surface {
    pub const ALL: [Surface; 5] = [
        Surface::Intent,
        Surface::Run,
        Surface::Log,
        Surface::Pulse,
        Surface::Templates,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Surface::Intent => "intent",
            Surface::Run => "run",
            Surface::Log => "log",
            Surface::Pulse => "pulse",
            Surface::Templates => "templates",
        }
    }
}

impl fmt::Display for Surface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Surface {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Surface::ALL
            .into_iter()
            .find(|surface| surface.id() == s)
            .ok_or_else(|| ParseError::UnknownSurface(s.to_string()))
    }
}

/// Which interactive surface receives key input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Templates,
    Intent,
    Run,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Templates => Focus::Intent,
            Focus::Intent => Focus::Run,
            Focus::Run => Focus::Templates,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Focus::Templates => Focus::Run,
            Focus::Intent => Focus::Templates,
            Focus::Run => Focus::Intent,
        }
    }

    pub fn surface(self) -> Surface {
        match self {
            Focus::Templates => Surface::Templates,
            Focus::Intent => Surface::Intent,
            Focus::Run => Surface::Run,
        }
    }
}

/// Identifier of one accepted run. Every scheduled step carries the id of
/// the run that scheduled it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RunId(pub u64);

impl fmt::Display for RunId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn surface_ids_parse_back() {
        for s in Surface::ALL {
            assert_eq!(s.id().parse::<Surface>(), Ok(s));
        }
        assert_eq!(
            "button".parse::<Surface>(),
            Err(ParseError::UnknownSurface("button".into()))
        );
    }

    #[test]
    fn focus_cycles_both_ways() {
        let mut f = Focus::default();
        for _ in 0..3 {
            f = f.next();
        }
        assert_eq!(f, Focus::Templates);
        assert_eq!(Focus::Templates.prev(), Focus::Run);
        assert_eq!(Focus::Run.surface(), Surface::Run);
    }
}
