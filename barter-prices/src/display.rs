use crate::summary::PriceSummary;
use prettytable::{Cell, Row, Table};

impl PriceSummary {
    pub fn print_summary(&self) {
        println!();
        self.table().printstd();
    }

    pub fn table(&self) -> Table {
        let mut table = Table::new();

        // Styling
        table.set_format(*prettytable::format::consts::FORMAT_BOX_CHARS);

        // Title row spanning both columns
        let mut title_cell = Cell::new("Price Series TearSheet").style_spec("bcB");
        title_cell.set_hspan(2);
        table.add_row(Row::new(vec![title_cell]));

        add_metric_row(&mut table, "Start", self.time_start.to_rfc3339());
        add_metric_row(&mut table, "End", self.time_end.to_rfc3339());
        add_metric_row(&mut table, "Observations", self.observations.to_string());
        add_metric_row(&mut table, "Elapsed Days", self.elapsed_days.to_string());
        add_metric_row(&mut table, "Return", percent(self.abs_return));
        add_metric_row(
            &mut table,
            &format!("Return {}", self.interval),
            percent(self.annualized_return),
        );
        add_metric_row(
            &mut table,
            &format!("CAGR {}", self.interval),
            percent(self.cagr),
        );
        add_metric_row(&mut table, "Drawdown Max", percent(self.max_drawdown));

        table
    }
}

fn add_metric_row(table: &mut Table, label: &str, value: String) {
    table.add_row(Row::new(vec![
        Cell::new(label).style_spec("bcB"),
        Cell::new(&value),
    ]));
}

fn percent(value: f64) -> String {
    format!("{:.2}%", value * 100.0)
}
