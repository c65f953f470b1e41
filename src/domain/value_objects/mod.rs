//! # Value Objects
//!
//! 不変で、生成時に自身を検証するバリューオブジェクト
//!
//! ## ユーザー
//!
//! - **UserId**: 空でないユーザーID
//! - **UserName**: 3文字以上のユーザー名
//!
//! ## その他
//!
//! - **Money**: 金額と通貨
//! - **FullName**: 姓と名
//! - **ModelNumber**: 製品コード・枝番・ロット番号からなる型番

pub mod full_name;
pub mod model_number;
pub mod money;
pub mod user_id;
pub mod user_name;

pub use full_name::FullName;
pub use model_number::ModelNumber;
pub use money::Money;
pub use user_id::UserId;
pub use user_name::UserName;
