use fraud_engine::{SignalSet, Transaction};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ===== Scoring Request =====
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRequest {
    pub customer_name: Option<String>,
    pub ip_address: Option<String>,
    pub location: Option<LocationDto>,
    pub payment_details: Option<PaymentDetailsDto>,
    pub transaction_details: Option<TransactionDetailsDto>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct LocationDto {
    pub city: Option<String>,
    pub state: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct PaymentDetailsDto {
    pub card_last4: Option<String>,
    pub name_on_card: Option<String>,
    pub purchase_amount: Option<Decimal>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct TransactionDetailsDto {
    pub merchant_name: Option<String>,
    pub merchant_location: Option<LocationDto>,
    pub purchased_item_count: Option<i32>,
}

/// Flatten the nested wire shape into the engine's transaction record.
/// Missing nested groups map to absent fields; the engine decides which
/// absences are errors.
impl From<TransactionRequest> for Transaction {
    fn from(request: TransactionRequest) -> Self {
        let mut transaction = Transaction {
            customer_name: request.customer_name,
            ip_address: request.ip_address,
            ..Transaction::default()
        };

        if let Some(location) = request.location {
            transaction.customer_city = location.city;
            transaction.customer_state = location.state;
        }

        if let Some(payment) = request.payment_details {
            transaction.card_last4 = payment.card_last4;
            transaction.name_on_card = payment.name_on_card;
            transaction.purchase_amount = payment.purchase_amount;
        }

        if let Some(details) = request.transaction_details {
            transaction.merchant_name = details.merchant_name;
            transaction.purchased_item_count = details.purchased_item_count;
            if let Some(merchant_location) = details.merchant_location {
                transaction.merchant_city = merchant_location.city;
                transaction.merchant_state = merchant_location.state;
            }
        }

        transaction
    }
}

// ===== Scoring Response =====
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionResponse {
    pub transaction_id: Uuid,
    pub customer_name: Option<String>,
    pub ip_address: Option<String>,
    pub location: LocationDto,
    pub payment_details: PaymentDetailsDto,
    pub transaction_details: TransactionDetailsDto,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fraud_signals: Option<SignalSet>,
}

impl TransactionResponse {
    pub fn new(transaction_id: Uuid, transaction: &Transaction, signals: Option<SignalSet>) -> Self {
        TransactionResponse {
            transaction_id,
            customer_name: transaction.customer_name.clone(),
            ip_address: transaction.ip_address.clone(),
            location: LocationDto {
                city: transaction.customer_city.clone(),
                state: transaction.customer_state.clone(),
            },
            payment_details: PaymentDetailsDto {
                card_last4: transaction.card_last4.clone(),
                name_on_card: transaction.name_on_card.clone(),
                purchase_amount: transaction.purchase_amount,
            },
            transaction_details: TransactionDetailsDto {
                merchant_name: transaction.merchant_name.clone(),
                merchant_location: Some(LocationDto {
                    city: transaction.merchant_city.clone(),
                    state: transaction.merchant_state.clone(),
                }),
                purchased_item_count: transaction.purchased_item_count,
            },
            fraud_signals: signals,
        }
    }
}

// ===== Health Check =====
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
}
