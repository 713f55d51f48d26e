use nft_staking::{NftStakingContract, NftStakingContractClient, RewardDescriptor};
use position_nft::{PositionNft, PositionNftClient};
use soroban_sdk::{
    testutils::{Address as _, Ledger as _},
    token::StellarAssetClient,
    vec, Address, Env,
};

pub const SECONDS_PER_YEAR: i128 = 365 * 24 * 60 * 60;
pub const TREASURY: i128 = SECONDS_PER_YEAR * 1_000;

pub struct TestContext {
    pub env: Env,
    pub client: NftStakingContractClient<'static>,
    pub positions: PositionNftClient<'static>,
    pub reward_token: Address,
    pub stakers: std::vec::Vec<Address>,
}

/// Deploys custody, one funded reward token and the ledger, and creates
/// `n_stakers` stakers owning positions `staker_index * 100 + k` for
/// `k in 0..positions_each`.
pub fn setup(n_stakers: usize, positions_each: u32) -> TestContext {
    let env = Env::default();
    env.mock_all_auths();
    env.ledger().set_timestamp(0);

    let nft_id = env.register(PositionNft, ());
    let positions = PositionNftClient::new(&env, &nft_id);
    positions.initialize(&Address::generate(&env));

    let reward_token = env
        .register_stellar_asset_contract_v2(Address::generate(&env))
        .address();

    let contract_id = env.register(NftStakingContract, ());
    let client = NftStakingContractClient::new(&env, &contract_id);
    client.initialize(
        &Address::generate(&env),
        &nft_id,
        &vec![
            &env,
            RewardDescriptor {
                payout_token: reward_token.clone(),
                rate_divisor: 1,
                unclaimed: 0,
            },
        ],
    );
    StellarAssetClient::new(&env, &reward_token).mint(&contract_id, &TREASURY);

    let mut stakers = std::vec::Vec::new();
    for i in 0..n_stakers {
        let staker = Address::generate(&env);
        for k in 0..positions_each {
            positions.mint(&staker, &position_id(i, k));
        }
        stakers.push(staker);
    }

    TestContext {
        env,
        client,
        positions,
        reward_token,
        stakers,
    }
}

pub fn position_id(staker_index: usize, k: u32) -> u32 {
    staker_index as u32 * 100 + k
}

pub fn available(ctx: &TestContext, staker: &Address) -> i128 {
    ctx.client
        .available_rewards(staker)
        .iter()
        .find(|r| r.payout_token == ctx.reward_token)
        .map(|r| r.unclaimed)
        .unwrap_or(0)
}
