use tabled::{Table, settings::Style};

/// Common styling for every table geoctl prints.
pub trait GeoctlTable {
    fn styled(&mut self) -> &mut Table;
}

impl GeoctlTable for Table {
    fn styled(&mut self) -> &mut Table {
        self.with(Style::psql())
    }
}
