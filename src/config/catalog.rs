//! Built-in resources of the food inventory schema.

use crate::config::types::{ColumnDef, ColumnType::*, ResourceDef};

pub static FOOD_ITEMS: ResourceDef = ResourceDef {
    path_segment: "food_items",
    table_name: "food_items",
    label: "Food item",
    updated_label: None,
    columns: &[
        ColumnDef::new("name", Text).not_null(),
        ColumnDef::new("category_id", Integer).references("categories"),
        ColumnDef::new("storage_location_id", Integer).references("storage_locations"),
        ColumnDef::new("quantity", Integer),
        ColumnDef::new("unit", Text),
        ColumnDef::new("expiry_date", Text),
    ],
};

pub static CATEGORIES: ResourceDef = ResourceDef {
    path_segment: "categories",
    table_name: "categories",
    label: "Category",
    updated_label: None,
    columns: &[ColumnDef::new("name", Text).not_null()],
};

pub static STORAGE_LOCATIONS: ResourceDef = ResourceDef {
    path_segment: "storage_locations",
    table_name: "storage_locations",
    label: "Storage location",
    updated_label: None,
    columns: &[ColumnDef::new("name", Text).not_null()],
};

pub static STORES: ResourceDef = ResourceDef {
    path_segment: "stores",
    table_name: "stores",
    label: "Store",
    updated_label: None,
    columns: &[
        ColumnDef::new("name", Text).not_null(),
        ColumnDef::new("address", Text),
        ColumnDef::new("website", Text),
    ],
};

pub static STORE_PRICES: ResourceDef = ResourceDef {
    path_segment: "store_prices",
    table_name: "store_prices",
    label: "Store price",
    updated_label: None,
    columns: &[
        ColumnDef::new("store_id", Integer).not_null().references("stores"),
        ColumnDef::new("food_item_id", Integer).not_null().references("food_items"),
        ColumnDef::new("price", Real).not_null(),
        ColumnDef::new("date", Text).not_null(),
        ColumnDef::new("unit", Text),
    ],
};

pub static PURCHASE_HISTORY: ResourceDef = ResourceDef {
    path_segment: "purchase_history",
    table_name: "purchase_history",
    label: "Purchase history entry",
    updated_label: Some("Purchase history"),
    columns: &[
        ColumnDef::new("store_id", Integer).not_null().references("stores"),
        ColumnDef::new("food_item_id", Integer).not_null().references("food_items"),
        ColumnDef::new("quantity", Integer).not_null(),
        ColumnDef::new("price", Real).not_null(),
        ColumnDef::new("date", Text).not_null(),
        ColumnDef::new("notes", Text),
    ],
};

pub static SHOPPING_LIST: ResourceDef = ResourceDef {
    path_segment: "shopping_list",
    table_name: "shopping_list",
    label: "Shopping list item",
    updated_label: None,
    columns: &[
        ColumnDef::new("food_item_id", Integer).not_null().references("food_items"),
        ColumnDef::new("quantity", Integer).not_null(),
        ColumnDef::new("unit", Text).not_null(),
        ColumnDef::new("priority", Integer).default_value("1"),
        ColumnDef::new("completed", Boolean).default_value("FALSE"),
    ],
};

pub static RECIPES: ResourceDef = ResourceDef {
    path_segment: "recipes",
    table_name: "recipes",
    label: "Recipe",
    updated_label: None,
    columns: &[
        ColumnDef::new("name", Text).not_null(),
        ColumnDef::new("description", Text),
        ColumnDef::new("instructions", Text).not_null(),
        ColumnDef::new("prep_time", Integer),
        ColumnDef::new("cook_time", Integer),
        ColumnDef::new("servings", Integer),
    ],
};

pub static RECIPE_INGREDIENTS: ResourceDef = ResourceDef {
    path_segment: "recipe_ingredients",
    table_name: "recipe_ingredients",
    label: "Recipe ingredient",
    updated_label: None,
    columns: &[
        ColumnDef::new("recipe_id", Integer).not_null().references("recipes"),
        ColumnDef::new("food_item_id", Integer).not_null().references("food_items"),
        ColumnDef::new("quantity", Real).not_null(),
        ColumnDef::new("unit", Text).not_null(),
        ColumnDef::new("notes", Text),
    ],
};

pub static RECIPE_SHOPPING_CHECKLIST: ResourceDef = ResourceDef {
    path_segment: "recipe_shopping_checklist",
    table_name: "recipe_shopping_checklist",
    label: "Recipe shopping checklist item",
    updated_label: None,
    columns: &[
        ColumnDef::new("recipe_id", Integer).not_null().references("recipes"),
        ColumnDef::new("ingredient_id", Integer).not_null().references("recipe_ingredients"),
        ColumnDef::new("quantity", Real).not_null(),
        ColumnDef::new("unit", Text).not_null(),
        ColumnDef::new("completed", Boolean).default_value("FALSE"),
    ],
};

pub static EXPENSES: ResourceDef = ResourceDef {
    path_segment: "expenses",
    table_name: "expenses",
    label: "Expense",
    updated_label: None,
    columns: &[
        ColumnDef::new("store_id", Integer).references("stores"),
        ColumnDef::new("food_item_id", Integer).references("food_items"),
        ColumnDef::new("amount", Real).not_null(),
        ColumnDef::new("date", Text).not_null(),
        ColumnDef::new("category", Text).not_null(),
        ColumnDef::new("notes", Text),
    ],
};

pub static HOME_COOKED_MEALS: ResourceDef = ResourceDef {
    path_segment: "home_cooked_meals",
    table_name: "home_cooked_meals",
    label: "Home cooked meal",
    updated_label: None,
    columns: &[
        ColumnDef::new("recipe_id", Integer).references("recipes"),
        ColumnDef::new("name", Text).not_null(),
        ColumnDef::new("date", Text).not_null(),
        ColumnDef::new("notes", Text),
        ColumnDef::new("rating", Integer),
    ],
};

pub static EATING_OUT_EXPENSES: ResourceDef = ResourceDef {
    path_segment: "eating_out_expenses",
    table_name: "eating_out_expenses",
    label: "Eating out expense",
    updated_label: None,
    columns: &[
        ColumnDef::new("store_id", Integer).not_null().references("stores"),
        ColumnDef::new("amount", Real).not_null(),
        ColumnDef::new("date", Text).not_null(),
        ColumnDef::new("notes", Text),
        ColumnDef::new("rating", Integer),
    ],
};

/// All built-in resources. Order is also DDL order.
pub static BUILTIN_RESOURCES: &[&ResourceDef] = &[
    &CATEGORIES,
    &STORAGE_LOCATIONS,
    &FOOD_ITEMS,
    &STORES,
    &STORE_PRICES,
    &PURCHASE_HISTORY,
    &SHOPPING_LIST,
    &RECIPES,
    &RECIPE_INGREDIENTS,
    &RECIPE_SHOPPING_CHECKLIST,
    &EXPENSES,
    &HOME_COOKED_MEALS,
    &EATING_OUT_EXPENSES,
];
