use crate::admission::enums::dos_decision::DosDecision;

impl DosDecision {
    pub fn severity(&self) -> u8 {
        match self {
            DosDecision::Admit => 0,
            DosDecision::Delay(_) => 1,
            DosDecision::Throttle => 2,
            DosDecision::Reject => 3,
        }
    }

    pub fn is_admitted(&self) -> bool {
        !matches!(self, DosDecision::Reject)
    }
}
