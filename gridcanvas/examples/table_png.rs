//! Renders a table with grouped headers, spans, and a title to `table.png`.
//!
//! Usage: `cargo run --example table_png -- path/to/font.ttf`

use std::fs::File;

use simplelog::{Config, LevelFilter, WriteLogger};

use gridcanvas::cell::CellInfo;
use gridcanvas::{
    Canvas, Color, ColumnSpec, RasterCanvas, Row, Table, TableOptions, TextAlign, TextOverflow,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Set up file logging
    let log_file = File::create("table_png.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let font_path = std::env::args()
        .nth(1)
        .ok_or("usage: table_png <font.ttf>")?;
    let font_bytes = std::fs::read(font_path)?;
    let canvas = RasterCanvas::new(2, 2, &font_bytes)?;

    let columns = vec![
        ColumnSpec::new("name")
            .child(ColumnSpec::new("first").data_index("first"))
            .child(ColumnSpec::new("last").data_index("last").render(
                |value, _row, index| match index {
                    0 => CellInfo::new(value.as_text()).row_span(3).into(),
                    1 | 2 => CellInfo::new(value.as_text()).row_span(0).into(),
                    _ => value.as_text().into(),
                },
            )),
        ColumnSpec::new("age")
            .data_index("age")
            .text_align(TextAlign::Center)
            .text_color(Color::rgb(0, 0, 255)),
        ColumnSpec::new("weight").data_index("weight").template("{c}kg"),
        ColumnSpec::new("address")
            .data_index("address")
            .width(200.0)
            .text_overflow(TextOverflow::Ellipsis),
        ColumnSpec::new("other-abcd")
            .child(ColumnSpec::new("a").data_index("a").render(
                |value, _row, index| match index {
                    2 => CellInfo::new(value.as_text()).col_span(2).row_span(2).into(),
                    3 => CellInfo::new(value.as_text()).col_span(0).row_span(0).into(),
                    _ => value.as_text().into(),
                },
            ))
            .child(ColumnSpec::new("b").data_index("b").render(
                |value, _row, index| match index {
                    2 | 3 => CellInfo::new(value.as_text()).col_span(0).row_span(0).into(),
                    _ => value.as_text().into(),
                },
            ))
            .child(
                ColumnSpec::new("c+d")
                    .child(ColumnSpec::new("c").data_index("c"))
                    .child(ColumnSpec::new("d").data_index("d")),
            ),
    ];

    let data = vec![
        Row::new()
            .set("first", "Jack")
            .set("last", "smith")
            .set("age", 16)
            .set("weight", 50)
            .set("address", "1.somewhere\n2.somewhere")
            .set("a", "a1")
            .set("b", "b1")
            .set("c", "c1")
            .set("d", "d1"),
        Row::new()
            .set("first", "Jack")
            .set("last", "smith")
            .set("age", 26)
            .set("weight", 60)
            .set("address", "street9527123456789no.,it is a too long address!")
            .set("a", "a2")
            .set("b", "b2")
            .set("c", "c2")
            .set("d", "d2"),
        Row::new()
            .set("first", "Jack")
            .set("last", "last")
            .set("age", 36)
            .set("weight", 70)
            .set("address", "where")
            .set("a", "merge-a+b\nline2\nline3")
            .set("b", "merge-a+b")
            .set("c", "c3")
            .set("d", "d3"),
        Row::new()
            .set("first", "Tom")
            .set("last", "last")
            .set("age", 46)
            .set("weight", 80)
            .set("address", "where")
            .set("a", "merge-a+b")
            .set("b", "merge-a+b")
            .set("c", "c4")
            .set("d", "d4"),
    ];

    let table = Table::new(
        canvas,
        TableOptions::new()
            .columns(columns)
            .data(data)
            .bg_color(Color::rgb(255, 255, 255))
            .title("This is table title!"),
    );

    let png = table.canvas().to_png()?;
    std::fs::write("table.png", png)?;
    println!(
        "wrote table.png ({}x{} px)",
        table.canvas().width(),
        table.canvas().height()
    );
    Ok(())
}
