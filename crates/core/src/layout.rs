//! Fixed positions on the A4 slip, in points from the bottom-left corner.

use packslip_types::PageSize;

pub const PAGE_SIZE: PageSize = PageSize::A4;

pub const LOGO_CONFIG_PATH: &str = "sales/identity/logo";
pub const TIMEZONE_CONFIG_PATH: &str = "general/locale/timezone";
pub const LOGO_MEDIA_DIR: &str = "sales/store/logo";

/// Logo box corners.
pub const LOGO_BOX: (f32, f32, f32, f32) = (425.0, 700.0, 582.8, 839.25);

pub const TITLE_SIZE: f32 = 16.0;
pub const TITLE_POS: (f32, f32) = (25.0, 780.0);
pub const ORDER_NUMBER_SIZE: f32 = 12.0;
pub const ORDER_NUMBER_POS: (f32, f32) = (25.0, 765.0);

pub const META_SIZE: f32 = 8.0;
pub const META_LABEL_Y: f32 = 725.0;
pub const META_VALUE_Y: f32 = 715.0;
pub const SHIPPING_METHOD_X: f32 = 25.0;
pub const PAYMENT_METHOD_X: f32 = 205.0;
pub const ORDER_DATE_X: f32 = 320.0;

pub const TABLE_LEFT: f32 = 25.0;
pub const TABLE_RIGHT: f32 = 570.0;
pub const HEADER_SIZE: f32 = 10.0;
pub const HEADER_GRAY: f32 = 0.5;
pub const HEADER_TOP: f32 = 700.0;
pub const HEADER_BOTTOM: f32 = 685.0;
pub const HEADER_TEXT_Y: f32 = 690.0;

pub const DESCRIPTION_X: f32 = 30.0;
pub const CHILD_DESCRIPTION_X: f32 = 40.0;
pub const WEIGHT_X: f32 = 205.0;
pub const ARTICLE_CODE_X: f32 = 320.0;
pub const SKU_X: f32 = 420.0;
pub const QUANTITY_X: f32 = 490.0;

pub const FIRST_ROW_Y: f32 = 670.0;
pub const ROW_HEIGHT: f32 = 20.0;
pub const ROW_SHADE_TOP: f32 = 15.0;
pub const ROW_SHADE_BOTTOM: f32 = 5.0;
pub const ROW_TEXT_RISE: f32 = 3.0;
pub const EVEN_ROW_GRAY: f32 = 0.7;
pub const ODD_ROW_GRAY: f32 = 0.9;
pub const NAME_MAX_CHARS: usize = 35;

pub const CHECKBOX_LEFT: f32 = 550.0;
pub const CHECKBOX_RIGHT: f32 = 560.0;
pub const CHECKBOX_HEIGHT: f32 = 10.0;

pub const ADDRESS_SIZE: f32 = 8.0;
pub const BILLING_X: f32 = 25.0;
pub const CONTACT_X: f32 = 205.0;
pub const SHIPPING_X: f32 = 320.0;
pub const ADDRESS_FIRST_OFFSET: f32 = 10.0;
pub const LINE_HEIGHT: f32 = 12.0;

pub const COMMENT_X: f32 = 25.0;
pub const COMMENT_OFFSET: f32 = 100.0;

/// Top of the address blocks once `rows` item lines are drawn.
pub fn address_top(rows: usize) -> f32 {
    FIRST_ROW_Y - rows as f32 * ROW_HEIGHT
}

/// Shade of item row `index`.
pub fn row_gray(index: usize) -> f32 {
    if index % 2 == 0 {
        EVEN_ROW_GRAY
    } else {
        ODD_ROW_GRAY
    }
}
