//! 市集数据库表结构
//!
//! 与外部关系型数据库的表一一对应：orders / products / profiles / user_tokens。
//! 每张表提供三种形状：
//! - Row: 查询返回的完整行
//! - Insert: 插入时的字段，服务端有默认值的列可省略
//! - Update: 更新时的字段，全部可省略
//!
//! 当前界面不读写这些表，仅作为类型化的数据访问面保留。
#![allow(dead_code)]

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// 表与其三种形状的对应关系
pub trait Table {
    const NAME: &'static str;
    type Row: Serialize + DeserializeOwned;
    type Insert: Serialize + DeserializeOwned;
    type Update: Serialize + DeserializeOwned + Default;
}

/// 枚举值解析失败
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("invalid {kind} value `{value}`")]
pub struct InvalidEnumValue {
    pub kind: &'static str,
    pub value: String,
}

/// 区分"字段缺失"与"显式 null"：缺失 -> None，null -> Some(None)
fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

macro_rules! wire_enum {
    ($name:ident, $kind:literal, { $($variant:ident => $wire:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "lowercase")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// 按声明顺序列出全部取值
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $wire),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = InvalidEnumValue;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($wire => Ok($name::$variant),)+
                    _ => Err(InvalidEnumValue {
                        kind: $kind,
                        value: s.to_string(),
                    }),
                }
            }
        }
    };
}

wire_enum!(OrderStatus, "order_status", {
    Pending => "pending",
    Paid => "paid",
    Shipped => "shipped",
    Delivered => "delivered",
    Cancelled => "cancelled",
});

wire_enum!(UserRole, "user_role", {
    Artisan => "artisan",
    Buyer => "buyer",
    Admin => "admin",
});

// ============ orders ============

pub struct Orders;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRow {
    pub buyer_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub id: Uuid,
    pub payment_method: Option<String>,
    pub product_id: Uuid,
    pub quantity: Option<i32>,
    pub status: Option<OrderStatus>,
    pub stripe_payment_id: Option<String>,
    pub total_amount: f64,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderInsert {
    pub buyer_id: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,
    pub product_id: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<OrderStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stripe_payment_id: Option<String>,
    pub total_amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl OrderInsert {
    pub fn new(buyer_id: Uuid, product_id: Uuid, total_amount: f64) -> Self {
        Self {
            buyer_id,
            created_at: None,
            id: None,
            payment_method: None,
            product_id,
            quantity: None,
            status: None,
            stripe_payment_id: None,
            total_amount,
            updated_at: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buyer_id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    #[serde(
        default,
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub payment_method: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_id: Option<Uuid>,
    #[serde(
        default,
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub quantity: Option<Option<i32>>,
    #[serde(
        default,
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub status: Option<Option<OrderStatus>>,
    #[serde(
        default,
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub stripe_payment_id: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Table for Orders {
    const NAME: &'static str = "orders";
    type Row = OrderRow;
    type Insert = OrderInsert;
    type Update = OrderUpdate;
}

// ============ products ============

pub struct Products;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRow {
    pub approved: Option<bool>,
    pub artisan_id: Uuid,
    pub category: Option<String>,
    pub created_at: DateTime<Utc>,
    pub description: Option<String>,
    pub featured: Option<bool>,
    pub id: Uuid,
    pub image_url: Option<String>,
    pub name: String,
    pub price: f64,
    pub stock_quantity: Option<i32>,
    pub tags: Option<Vec<String>>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductInsert {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approved: Option<bool>,
    pub artisan_id: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub name: String,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock_quantity: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl ProductInsert {
    pub fn new(artisan_id: Uuid, name: String, price: f64) -> Self {
        Self {
            approved: None,
            artisan_id,
            category: None,
            created_at: None,
            description: None,
            featured: None,
            id: None,
            image_url: None,
            name,
            price,
            stock_quantity: None,
            tags: None,
            updated_at: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductUpdate {
    #[serde(
        default,
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub approved: Option<Option<bool>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artisan_id: Option<Uuid>,
    #[serde(
        default,
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub category: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(
        default,
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<Option<String>>,
    #[serde(
        default,
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub featured: Option<Option<bool>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    #[serde(
        default,
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub image_url: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(
        default,
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub stock_quantity: Option<Option<i32>>,
    #[serde(
        default,
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub tags: Option<Option<Vec<String>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Table for Products {
    const NAME: &'static str = "products";
    type Row = ProductRow;
    type Insert = ProductInsert;
    type Update = ProductUpdate;
}

// ============ profiles ============

pub struct Profiles;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileRow {
    pub avatar_url: Option<String>,
    pub balance: Option<f64>,
    pub created_at: DateTime<Utc>,
    pub email: String,
    pub full_name: Option<String>,
    pub id: Uuid,
    pub role: Option<UserRole>,
    pub tokens: Option<i64>,
    pub updated_at: DateTime<Utc>,
    pub user_id: Uuid,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileInsert {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub balance: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<UserRole>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tokens: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    pub user_id: Uuid,
}

impl ProfileInsert {
    pub fn new(user_id: Uuid, email: String) -> Self {
        Self {
            avatar_url: None,
            balance: None,
            created_at: None,
            email,
            full_name: None,
            id: None,
            role: None,
            tokens: None,
            updated_at: None,
            user_id,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileUpdate {
    #[serde(
        default,
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub avatar_url: Option<Option<String>>,
    #[serde(
        default,
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub balance: Option<Option<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(
        default,
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub full_name: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    #[serde(
        default,
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub role: Option<Option<UserRole>>,
    #[serde(
        default,
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub tokens: Option<Option<i64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<Uuid>,
}

impl Table for Profiles {
    const NAME: &'static str = "profiles";
    type Row = ProfileRow;
    type Insert = ProfileInsert;
    type Update = ProfileUpdate;
}

// ============ user_tokens ============

pub struct UserTokens;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserTokenRow {
    pub amount: i64,
    pub created_at: DateTime<Utc>,
    pub description: Option<String>,
    pub id: Uuid,
    pub transaction_type: String,
    pub user_id: Uuid,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserTokenInsert {
    pub amount: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub transaction_type: String,
    pub user_id: Uuid,
}

impl UserTokenInsert {
    pub fn new(user_id: Uuid, amount: i64, transaction_type: String) -> Self {
        Self {
            amount,
            created_at: None,
            description: None,
            id: None,
            transaction_type,
            user_id,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserTokenUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(
        default,
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<Uuid>,
}

impl Table for UserTokens {
    const NAME: &'static str = "user_tokens";
    type Row = UserTokenRow;
    type Insert = UserTokenInsert;
    type Update = UserTokenUpdate;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_enum_wire_values() {
        let statuses: Vec<&str> = OrderStatus::ALL.iter().map(|s| s.as_str()).collect();
        assert_eq!(
            statuses,
            ["pending", "paid", "shipped", "delivered", "cancelled"]
        );
        let roles: Vec<String> = UserRole::ALL.iter().map(|r| r.to_string()).collect();
        assert_eq!(roles, ["artisan", "buyer", "admin"]);

        assert_eq!(
            serde_json::to_value(OrderStatus::Cancelled).unwrap(),
            json!("cancelled")
        );
        assert_eq!("admin".parse::<UserRole>(), Ok(UserRole::Admin));
    }

    #[test]
    fn test_enum_parse_rejects_unknown() {
        let err = "refunded".parse::<OrderStatus>().unwrap_err();
        assert_eq!(err.kind, "order_status");
        assert_eq!(err.to_string(), "invalid order_status value `refunded`");
    }

    #[test]
    fn test_table_names() {
        assert_eq!(Orders::NAME, "orders");
        assert_eq!(Products::NAME, "products");
        assert_eq!(Profiles::NAME, "profiles");
        assert_eq!(UserTokens::NAME, "user_tokens");
    }

    #[test]
    fn test_order_row_from_json() {
        let row: OrderRow = serde_json::from_value(json!({
            "buyer_id": "6f1c1f8e-7b55-4c1a-9d53-2a1f0a8e7a11",
            "created_at": "2025-03-01T12:00:00Z",
            "id": "0b8f9a2e-1c3d-4e5f-8a9b-0c1d2e3f4a5b",
            "payment_method": null,
            "product_id": "a1b2c3d4-e5f6-4a7b-8c9d-0e1f2a3b4c5d",
            "quantity": 2,
            "status": "shipped",
            "stripe_payment_id": null,
            "total_amount": 49.5,
            "updated_at": "2025-03-02T08:30:00Z"
        }))
        .unwrap();

        assert_eq!(row.status, Some(OrderStatus::Shipped));
        assert_eq!(row.quantity, Some(2));
        assert!(row.payment_method.is_none());
    }

    #[test]
    fn test_insert_omits_defaulted_columns() {
        let user_id = Uuid::new_v4();
        let insert = UserTokenInsert::new(user_id, 100, "purchase".to_string());
        let value = serde_json::to_value(&insert).unwrap();
        let obj = value.as_object().unwrap();

        assert_eq!(obj.len(), 3);
        assert_eq!(obj["amount"], json!(100));
        assert_eq!(obj["transaction_type"], json!("purchase"));
        assert!(!obj.contains_key("id"));
        assert!(!obj.contains_key("created_at"));
    }

    #[test]
    fn test_update_distinguishes_null_from_absent() {
        let update = ProfileUpdate {
            full_name: Some(None),
            role: Some(Some(UserRole::Artisan)),
            ..Default::default()
        };
        let value = serde_json::to_value(&update).unwrap();
        assert_eq!(value, json!({ "full_name": null, "role": "artisan" }));

        let parsed: ProfileUpdate =
            serde_json::from_value(json!({ "full_name": null, "role": "artisan" })).unwrap();
        assert_eq!(parsed, update);
        assert!(parsed.avatar_url.is_none());
    }

    #[test]
    fn test_empty_update_serializes_to_empty_object() {
        let value = serde_json::to_value(ProductUpdate::default()).unwrap();
        assert_eq!(value, json!({}));
    }
}
