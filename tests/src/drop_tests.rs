use crate::utils::{read_wasm, setup_sandbox};
use anyhow::Result;
use near_workspaces::types::{Gas as NearGas, NearToken};
use near_workspaces::{Account, Contract};
use serde_json::json;

async fn deploy_drop(
    worker: &near_workspaces::Worker<near_workspaces::network::Sandbox>,
    wasm: &[u8],
    payout_a: &Account,
    payout_b: &Account,
    allowlist_root: Option<String>,
) -> Result<Contract> {
    let contract = worker.dev_deploy(wasm).await?;
    let outcome = contract
        .call("new")
        .args_json(json!({
            "custom_base_uri": "ipfs://Qmag7Hgh3C2igYajdYFtLgE132yjEgwjAda4x4HBXj8tNv/",
            "contract_uri": "ipfs://QmZvf1ZS2nnFh6sj8G61TmzLetvB82458SXU1TCNqLZD6u",
            "max_supply": 777,
            "payout_recipients": [
                { "account_id": payout_a.id(), "percent": 90 },
                { "account_id": payout_b.id(), "percent": 10 }
            ],
            "allowlist_root": allowlist_root,
        }))
        .transact()
        .await?;
    assert!(outcome.is_success(), "new failed: {:#?}", outcome);
    Ok(contract)
}

#[tokio::test]
async fn test_public_mint_lifecycle() -> Result<()> {
    let Some(wasm) = read_wasm("nft-drop") else {
        return Ok(());
    };
    let worker = setup_sandbox().await?;
    let gallery = worker.dev_create_account().await?;
    let dev = worker.dev_create_account().await?;
    let buyer = worker.dev_create_account().await?;
    let contract = deploy_drop(&worker, &wasm, &gallery, &dev, None).await?;

    // Owner (the contract account, which called `new`) opens the public stage.
    let outcome = contract
        .call("set_mint_stage")
        .args_json(json!({ "stage": "public" }))
        .transact()
        .await?;
    assert!(outcome.is_success(), "{:#?}", outcome);

    // Exact payment: 12 x 0.02 NEAR.
    let outcome = buyer
        .call(contract.id(), "public_mint")
        .args_json(json!({ "quantity": 12 }))
        .deposit(NearToken::from_millinear(240))
        .transact()
        .await?;
    assert!(outcome.is_success(), "{:#?}", outcome);

    let counter: u32 = contract.view("mint_counter").await?.json()?;
    assert_eq!(counter, 12);
    let balance: u32 = contract
        .view("balance_of")
        .args_json(json!({ "account_id": buyer.id() }))
        .await?
        .json()?;
    assert_eq!(balance, 12);

    // Inexact payment is rejected and the counter does not move.
    let outcome = buyer
        .call(contract.id(), "public_mint")
        .args_json(json!({ "quantity": 1 }))
        .deposit(NearToken::from_millinear(30))
        .transact()
        .await?;
    assert!(outcome.is_failure());

    // A request past the supply cap is rejected in full.
    let outcome = buyer
        .call(contract.id(), "public_mint")
        .args_json(json!({ "quantity": 778 }))
        .deposit(NearToken::from_millinear(15_560))
        .transact()
        .await?;
    assert!(outcome.is_failure());
    let counter: u32 = contract.view("mint_counter").await?.json()?;
    assert_eq!(counter, 12);

    // Non-owner withdrawal is rejected; owner withdrawal drains the treasury.
    let outcome = buyer.call(contract.id(), "withdraw").transact().await?;
    assert!(outcome.is_failure());
    let outcome = contract.call("withdraw").transact().await?;
    assert!(outcome.is_success(), "{:#?}", outcome);
    let treasury: String = contract.view("treasury_balance").await?.json()?;
    assert_eq!(treasury, "0");

    Ok(())
}

#[tokio::test]
async fn test_token_gated_restricted_mint() -> Result<()> {
    let (Some(drop_wasm), Some(ft_wasm)) = (read_wasm("nft-drop"), read_wasm("mock-ft")) else {
        return Ok(());
    };
    let worker = setup_sandbox().await?;
    let gallery = worker.dev_create_account().await?;
    let dev = worker.dev_create_account().await?;
    let relayer = worker.dev_create_account().await?;

    let token = worker.dev_deploy(&ft_wasm).await?;
    let outcome = token
        .call("new")
        .args_json(json!({ "owner_id": token.id(), "total_supply": "100" }))
        .transact()
        .await?;
    assert!(outcome.is_success(), "{:#?}", outcome);
    token
        .call("mint")
        .args_json(json!({ "account_id": relayer.id(), "amount": "2" }))
        .transact()
        .await?
        .into_result()?;

    let drop = deploy_drop(&worker, &drop_wasm, &gallery, &dev, None).await?;
    drop.call("set_allowance_token")
        .args_json(json!({ "token": token.id() }))
        .transact()
        .await?
        .into_result()?;

    // Stage is still inactive: the transfer lands but the mint panics, so the
    // token contract refunds the allowance and no unit is issued.
    let outcome = relayer
        .call(token.id(), "ft_transfer_call")
        .args_json(json!({
            "receiver_id": drop.id(),
            "amount": "1",
            "memo": null,
            "msg": ""
        }))
        .deposit(NearToken::from_yoctonear(1))
        .gas(NearGas::from_tgas(120))
        .transact()
        .await?;
    assert!(outcome.is_success(), "{:#?}", outcome);
    let counter: u32 = drop.view("mint_counter").await?.json()?;
    assert_eq!(counter, 0);
    let balance: String = token
        .view("ft_balance_of")
        .args_json(json!({ "account_id": relayer.id() }))
        .await?
        .json()?;
    assert_eq!(balance, "2", "failed mint must refund the allowance unit");

    drop.call("set_mint_stage")
        .args_json(json!({ "stage": "restricted" }))
        .transact()
        .await?
        .into_result()?;

    // One allowance unit buys exactly one restricted mint.
    relayer
        .call(token.id(), "ft_transfer_call")
        .args_json(json!({
            "receiver_id": drop.id(),
            "amount": "1",
            "memo": null,
            "msg": ""
        }))
        .deposit(NearToken::from_yoctonear(1))
        .gas(NearGas::from_tgas(120))
        .transact()
        .await?
        .into_result()?;

    let counter: u32 = drop.view("mint_counter").await?.json()?;
    assert_eq!(counter, 1);
    let unit_owner: Option<String> = drop
        .view("unit_owner")
        .args_json(json!({ "unit_id": 1 }))
        .await?
        .json()?;
    assert_eq!(unit_owner.as_deref(), Some(relayer.id().as_str()));
    let balance: String = token
        .view("ft_balance_of")
        .args_json(json!({ "account_id": relayer.id() }))
        .await?
        .json()?;
    assert_eq!(balance, "1");

    Ok(())
}

#[tokio::test]
async fn test_views_and_metadata() -> Result<()> {
    let Some(wasm) = read_wasm("nft-drop") else {
        return Ok(());
    };
    let worker = setup_sandbox().await?;
    let gallery = worker.dev_create_account().await?;
    let dev = worker.dev_create_account().await?;
    let stranger = worker.dev_create_account().await?;
    let contract = deploy_drop(&worker, &wasm, &gallery, &dev, None).await?;

    let uri: String = contract.view("contract_uri").await?.json()?;
    assert_eq!(uri, "ipfs://QmZvf1ZS2nnFh6sj8G61TmzLetvB82458SXU1TCNqLZD6u");

    let royalty: serde_json::Value = contract
        .view("royalty_info")
        .args_json(json!({ "unit_id": 1, "sale_price": "100" }))
        .await?
        .json()?;
    assert_eq!(royalty["amount"], "10");
    assert_eq!(royalty["receiver"], contract.id().as_str());

    let outcome = stranger
        .call(contract.id(), "update_metadata")
        .args_json(json!({ "new_base_uri": "test" }))
        .transact()
        .await?;
    assert!(outcome.is_failure());

    contract
        .call("update_metadata")
        .args_json(json!({ "new_base_uri": "test" }))
        .transact()
        .await?
        .into_result()?;
    let base: String = contract.view("custom_base_uri").await?.json()?;
    assert_eq!(base, "test");

    Ok(())
}
