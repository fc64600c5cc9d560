//! appsearch resolve - Show the index field name of an attribute

use clap::Args;
use serde::Serialize;

use crate::app::AppContext;
use crate::cli::output::emit_json;
use crate::error::Result;
use crate::schema::FieldContext;

#[derive(Args, Debug)]
pub struct ResolveArgs {
    /// Attribute code
    pub attribute: String,

    /// Usage to resolve for: search, filter or sort
    #[arg(long, default_value = "search")]
    pub context: FieldContext,
}

#[derive(Serialize)]
struct Resolution<'a> {
    attribute: &'a str,
    context: FieldContext,
    field: String,
}

pub fn run(ctx: &AppContext, args: &ResolveArgs) -> Result<()> {
    let attribute = ctx.attributes.attribute(&args.attribute)?;
    let field = ctx.field_names.field_name(&attribute, args.context)?;

    if ctx.robot_mode {
        return emit_json(
            &Resolution {
                attribute: &args.attribute,
                context: args.context,
                field,
            },
            false,
        );
    }
    println!("{field}");
    Ok(())
}
