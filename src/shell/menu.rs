//! Menu choices

/// An entry of the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddExpense,
    ViewAll,
    Summary,
    MonthlyReport,
    Exit,
}

impl MenuChoice {
    /// All choices in menu order
    pub const ALL: [MenuChoice; 5] = [
        MenuChoice::AddExpense,
        MenuChoice::ViewAll,
        MenuChoice::Summary,
        MenuChoice::MonthlyReport,
        MenuChoice::Exit,
    ];

    /// Parse the user's answer; surrounding whitespace is ignored
    pub fn parse(answer: &str) -> Option<Self> {
        match answer.trim() {
            "1" => Some(MenuChoice::AddExpense),
            "2" => Some(MenuChoice::ViewAll),
            "3" => Some(MenuChoice::Summary),
            "4" => Some(MenuChoice::MonthlyReport),
            "5" => Some(MenuChoice::Exit),
            _ => None,
        }
    }

    /// Key the user types to pick this choice
    pub fn key(&self) -> u8 {
        match self {
            MenuChoice::AddExpense => 1,
            MenuChoice::ViewAll => 2,
            MenuChoice::Summary => 3,
            MenuChoice::MonthlyReport => 4,
            MenuChoice::Exit => 5,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MenuChoice::AddExpense => "Add Expense",
            MenuChoice::ViewAll => "View All Expenses",
            MenuChoice::Summary => "Show Summary (Charts)",
            MenuChoice::MonthlyReport => "Monthly Report",
            MenuChoice::Exit => "Exit",
        }
    }
}
