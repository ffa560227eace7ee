use anyhow::Result;
use payment_order_codec::{CodecError, PaymentOrderCodec};
use std::sync::Arc;

fn payload(i: usize) -> Vec<u8> {
    format!(
        r#"{{"creditor_account":{{"iban":"DE{:020}"}},"creditor_name":"Creditor {}","debtor_account":{{"iban":"FR{:020}"}},"instructed_amount":{{"amount":"{}.00","currency":"EUR"}},"end_to_end_identification":"e2e-{}"}}"#,
        i,
        i,
        i + 1,
        i + 1,
        i
    )
    .into_bytes()
}

/// One shared codec, many tasks decoding independent payloads at once
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_decode_shares_one_codec() -> Result<()> {
    let codec = Arc::new(PaymentOrderCodec::new());
    let mut handles = Vec::new();

    for i in 0..64 {
        let codec = Arc::clone(&codec);
        handles.push(tokio::spawn(async move {
            let raw = payload(i);
            let order = codec.decode(&raw)?;
            let reencoded = codec.encode(&order)?;
            Ok::<_, CodecError>((i, order, reencoded))
        }));
    }

    for handle in handles {
        let (i, order, reencoded) = handle.await??;
        assert_eq!(order.end_to_end_identification, Some(format!("e2e-{}", i)));
        assert_eq!(reencoded, payload(i));
    }
    Ok(())
}

#[test]
fn test_concurrent_validation_on_threads_is_deterministic() {
    let codec = Arc::new(PaymentOrderCodec::new());
    let raw = br#"{"creditor_name":"","instructed_amount":{"amount":"-1","currency":"EUR"}}"#;
    let expected = codec.parse(raw).map(|order| codec.validate(&order)).unwrap();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let codec = Arc::clone(&codec);
            std::thread::spawn(move || {
                let order = codec.parse(raw).unwrap();
                codec.validate(&order)
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
    assert_eq!(expected.len(), 4);
}
