#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use nft_staking::{NftStakingContract, NftStakingContractClient, RewardDescriptor};
use position_nft::{PositionNft, PositionNftClient};
use soroban_sdk::{
    testutils::{Address as _, Ledger as _},
    token::StellarAssetClient,
    vec, Address, Env,
};

const STAKERS: usize = 4;
const POSITIONS: u32 = 8;

#[derive(Arbitrary, Debug)]
pub enum FuzzAction {
    Deposit { staker: u8, position: u8 },
    Withdraw { staker: u8, position: u8 },
    Claim { staker: u8 },
    Advance { seconds: u32 },
    SetDivisor { divisor: i64 },
}

fuzz_target!(|actions: Vec<FuzzAction>| {
    let env = Env::default();
    env.mock_all_auths();

    let nft_id = env.register(PositionNft, ());
    let positions = PositionNftClient::new(&env, &nft_id);
    positions.initialize(&Address::generate(&env));

    let reward_token = env
        .register_stellar_asset_contract_v2(Address::generate(&env))
        .address();

    let contract_id = env.register(NftStakingContract, ());
    let client = NftStakingContractClient::new(&env, &contract_id);
    let admin = Address::generate(&env);
    let descriptor = |rate_divisor: i128| RewardDescriptor {
        payout_token: reward_token.clone(),
        rate_divisor,
        unclaimed: 0,
    };
    client.initialize(&admin, &nft_id, &vec![&env, descriptor(1)]);
    StellarAssetClient::new(&env, &reward_token).mint(&contract_id, &1_000_000_000_000i128);

    // Positions are dealt round-robin so every staker owns some.
    let users: Vec<Address> = (0..STAKERS).map(|_| Address::generate(&env)).collect();
    for id in 0..POSITIONS {
        positions.mint(&users[id as usize % STAKERS], &id);
    }

    let mut now = 0u64;
    for action in actions {
        match action {
            FuzzAction::Deposit { staker, position } => {
                let caller = &users[staker as usize % STAKERS];
                let _ = client.try_deposit(caller, &(position as u32 % POSITIONS));
            }
            FuzzAction::Withdraw { staker, position } => {
                let caller = &users[staker as usize % STAKERS];
                let _ = client.try_withdraw(caller, &(position as u32 % POSITIONS));
            }
            FuzzAction::Claim { staker } => {
                let _ = client.try_claim(&users[staker as usize % STAKERS]);
            }
            FuzzAction::Advance { seconds } => {
                now = now.saturating_add(seconds as u64);
                env.ledger().set_timestamp(now);
            }
            FuzzAction::SetDivisor { divisor } => {
                let _ = client.try_set_schedule(&admin, &vec![&env, descriptor(divisor as i128)]);
            }
        }

        let sum: u64 = users.iter().map(|u| client.get_amount_staked(u)).sum();
        assert_eq!(client.get_total_staked(), sum);
        for user in &users {
            assert_eq!(
                client.get_amount_staked(user),
                client.active_positions(user).len() as u64
            );
        }
    }
});
