mod point_store;
