use super::*;

/// Tests creating an event with participations.
///
/// Expected: Ok and the participations listed for the event
#[tokio::test]
async fn creates_event_with_participations() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (guild, users) = factory::helpers::create_guild_with_users(db, 2, 0).await?;
    let guild_id = guild.guild_id as u64;

    let event = EventRepository::new(db)
        .create(guild_id, "Skill of the Week", Some(42))
        .await
        .unwrap();
    let participations: Vec<Participation> = users
        .iter()
        .enumerate()
        .map(|(i, u)| Participation {
            user_id: u.user_id as u64,
            placement: i as i32 + 1,
        })
        .collect();
    let inserted = ParticipationRepository::new(db)
        .create_many(guild_id, event.id, &participations)
        .await
        .unwrap();

    assert_eq!(inserted, 2);
    assert_eq!(event.wom_competition_id, Some(42));
    let stored = ParticipationRepository::new(db).get_by_event(event.id).await.unwrap();
    assert_eq!(stored.len(), 2);

    Ok(())
}

/// Tests that an event is only found in its own guild.
///
/// Expected: Ok(None) when looked up from another guild
#[tokio::test]
async fn find_is_scoped_to_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;
    let other = factory::create_guild(db).await?;

    let repo = EventRepository::new(db);
    let event = repo.create(guild.guild_id as u64, "Bingo", None).await.unwrap();

    assert!(repo.find(other.guild_id as u64, event.id).await.unwrap().is_none());
    assert!(repo.find(guild.guild_id as u64, event.id).await.unwrap().is_some());

    Ok(())
}
