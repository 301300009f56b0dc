pub mod monthly_table;
pub mod observation;
pub mod variable;
