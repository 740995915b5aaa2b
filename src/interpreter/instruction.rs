use crate::parser::{Arguments, Command};

/// The closed set of instructions the interpreter understands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Instruction<'a> {
    /// G0, handled exactly like G1
    Rapid(&'a Arguments),
    /// G1
    Linear(&'a Arguments),
    /// G2 (clockwise) and G3
    Arc {
        clockwise: bool,
        args: &'a Arguments,
    },
    /// G20, fatal
    InchUnits,
    /// G21, the default
    MillimeterUnits,
    /// G28, recognized but not simulated
    Home(&'a Arguments),
    /// G90
    Absolute,
    /// G91
    Relative,
    /// G92
    SetPosition(&'a Arguments),
    /// Anything else, kept for the warning
    Unknown(&'a str),
}

impl<'a> Instruction<'a> {
    pub fn decode(command: &'a Command) -> Self {
        let args = &command.args;
        match command.code.as_str() {
            "G0" => Instruction::Rapid(args),
            "G1" => Instruction::Linear(args),
            "G2" => Instruction::Arc {
                clockwise: true,
                args,
            },
            "G3" => Instruction::Arc {
                clockwise: false,
                args,
            },
            "G20" => Instruction::InchUnits,
            "G21" => Instruction::MillimeterUnits,
            "G28" => Instruction::Home(args),
            "G90" => Instruction::Absolute,
            "G91" => Instruction::Relative,
            "G92" => Instruction::SetPosition(args),
            other => Instruction::Unknown(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_known_codes() {
        let g2 = Command::new("G2", Arguments::new());
        assert!(matches!(
            Instruction::decode(&g2),
            Instruction::Arc {
                clockwise: true,
                ..
            }
        ));

        let g91 = Command::new("G91", Arguments::new());
        assert_eq!(Instruction::decode(&g91), Instruction::Relative);
    }

    #[test]
    fn test_decode_keeps_unknown_code() {
        let m104 = Command::new("M104", Arguments::new());
        assert_eq!(Instruction::decode(&m104), Instruction::Unknown("M104"));
    }
}
