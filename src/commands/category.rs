//! Category commands: `add-category`, `delete-category`, `view-category`

use crate::display::format_category_list;
use crate::error::SaverResult;
use crate::parser::{self, Arguments};
use crate::services::CategoryService;
use crate::session::Session;

use super::{Command, DESCRIPTION_KEY};

/// `add-category NAME [d/ DESCRIPTION]`
#[derive(Debug)]
pub struct AddCategoryCommand;

impl Command for AddCategoryCommand {
    fn name(&self) -> &'static str {
        "add-category"
    }

    fn usage(&self) -> &'static str {
        "add-category NAME [d/ DESCRIPTION]"
    }

    fn description(&self) -> &'static str {
        "Create a new category with an optional description."
    }

    fn argument_keys(&self) -> &'static [&'static str] {
        &[DESCRIPTION_KEY]
    }

    fn execute(&self, arguments: &Arguments, session: &mut Session) -> SaverResult<Vec<String>> {
        let name = arguments.require_main("Category name")?;
        let description = arguments.get(DESCRIPTION_KEY).unwrap_or_default();

        let mut service = CategoryService::new(&mut session.storage);
        let (position, category) = service.create(name, description)?;

        Ok(vec![
            "Category added:".to_string(),
            format!("{}. {}", position, category),
            format!("You now have {} categories.", service.list().len()),
        ])
    }
}

/// `delete-category INDEX`
#[derive(Debug)]
pub struct DeleteCategoryCommand;

impl Command for DeleteCategoryCommand {
    fn name(&self) -> &'static str {
        "delete-category"
    }

    fn usage(&self) -> &'static str {
        "delete-category INDEX"
    }

    fn description(&self) -> &'static str {
        "Delete the category at INDEX (as shown by view-category)."
    }

    fn execute(&self, arguments: &Arguments, session: &mut Session) -> SaverResult<Vec<String>> {
        let position = parser::parse_position(arguments.require_main("Category index")?)?;

        let mut service = CategoryService::new(&mut session.storage);
        let removed = service.delete(position)?;

        Ok(vec![
            "Category deleted:".to_string(),
            removed.to_string(),
        ])
    }
}

/// `view-category`
#[derive(Debug)]
pub struct ViewCategoryCommand;

impl Command for ViewCategoryCommand {
    fn name(&self) -> &'static str {
        "view-category"
    }

    fn usage(&self) -> &'static str {
        "view-category"
    }

    fn description(&self) -> &'static str {
        "List all categories."
    }

    fn execute(&self, _arguments: &Arguments, session: &mut Session) -> SaverResult<Vec<String>> {
        let service = CategoryService::new(&mut session.storage);
        let categories = service.list();

        let mut lines = Vec::with_capacity(categories.len() + 1);
        if !categories.is_empty() {
            lines.push("Here are your categories:".to_string());
        }
        lines.extend(format_category_list(categories));
        Ok(lines)
    }
}
