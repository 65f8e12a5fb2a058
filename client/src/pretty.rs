//! Colorized, human-readable rendering of decoded project accounts.

use std::fmt::{
    self,
    Display,
    Formatter,
};

use colored::Colorize;
use crowdfund_interface::{
    state::ProjectInfo,
    Pubkey,
};

use crate::{
    fmt_kv,
    transactions::LAMPORTS_PER_SOL,
    LogColor,
};

pub struct PrettyProject<'a> {
    pub address: &'a Pubkey,
    pub project: &'a ProjectInfo,
}

impl Display for PrettyProject<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let project = self.project;
        let status = match project.is_funded() {
            true => "funded".color(LogColor::Highlight),
            false => "raising".color(LogColor::Info),
        };

        writeln!(f, "{} {}", project.name.bold(), status)?;
        writeln!(f, "  {}", fmt_kv("address", self.address))?;
        writeln!(f, "  {}", fmt_kv("owner", project.owner))?;
        writeln!(f, "  {}", fmt_kv("bank", project.bank))?;
        writeln!(f, "  {}", fmt_kv("milestone", Sol(project.milestone)))?;
        writeln!(f, "  {}", fmt_kv("raised", Sol(project.raised)))?;
        write!(f, "  {}", fmt_kv("remaining", Sol(project.remaining())))
    }
}

/// Lamports rendered alongside their SOL value.
pub struct Sol(pub u64);

impl Display for Sol {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let whole = self.0 / LAMPORTS_PER_SOL;
        let frac = self.0 % LAMPORTS_PER_SOL;
        write!(f, "{} lamports ({whole}.{frac:09} SOL)", self.0)
    }
}
