use std::fmt;

use crate::analysis::IncreasingRuns;

//------------------------------------------

fn write_joined<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    xs: impl IntoIterator<Item = T>,
) -> fmt::Result {
    for (i, x) in xs.into_iter().enumerate() {
        if i > 0 {
            write!(f, ",")?;
        }
        write!(f, "{}", x)?;
    }
    Ok(())
}

pub struct MaxProductReport(pub u64);

impl fmt::Display for MaxProductReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Maximum Calorie Intake in contiguous Days : {}", self.0)
    }
}

pub struct IncreasingRunsReport<'a>(pub &'a IncreasingRuns);

impl fmt::Display for IncreasingRunsReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Increase in Calories intake Contiguously: ")?;
        write_joined(f, &self.0.values)?;
        write!(f, "\nRespective Days: ")?;
        write_joined(f, &self.0.days)?;
        write!(f, "\nDay's Count: {}", self.0.day_count)
    }
}

//------------------------------------------
